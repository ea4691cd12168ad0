pub mod histogram;
pub mod image_source;
pub mod partitioner;
pub mod pixel;
pub mod pixel_grid;
pub mod ranker;
pub mod worker;
