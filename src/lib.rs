// THEORY:
// This file is the main entry point for the `chroma_census` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (like the bundled
// CLI binary).
//
// The primary goal is to export the `CensusPipeline` and its associated data
// structures (`CensusConfig`, `RankedEntry`, etc.) as the clean, high-level
// interface for the entire engine. The internal modules (`core_modules`) are
// encapsulated behind it, providing a clean separation of concerns.

pub mod core_modules;
pub mod errors;
pub mod pipeline;

pub use errors::CensusError;
pub use pipeline::{
    load_pixel_grid, CensusConfig, CensusPipeline, ColorKey, RankedEntry, ScaleFactor,
};
