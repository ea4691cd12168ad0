// THEORY:
// The `image_source` module is the engine's only edge against the
// filesystem. It reads the raw bytes, decodes them, applies the configured
// downscale, and hands the rest of the system an immutable `PixelGrid`.
// Everything past this module is pure in-memory computation.
//
// Downscaling exists to bound total pixel work: counting exact colors on a
// 48-megapixel photo is rarely more informative than counting them on a
// quarter-scale version, and it is an order of magnitude faster. The scale
// is restricted to a fixed set of fractions so the CLI surface stays
// predictable, and resampling is bilinear to match what the fractions
// promise — no sharpening surprises in the color distribution.

use crate::core_modules::pixel_grid::PixelGrid;
use crate::errors::CensusError;
use image::imageops::FilterType;
use std::path::Path;
use std::str::FromStr;

/// The downscale applied before counting, as a fraction of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleFactor {
    Full,
    Half,
    #[default]
    Quarter,
    Eighth,
    Twelfth,
    Sixteenth,
    ThirtySecond,
}

impl ScaleFactor {
    pub const ALLOWED: [&'static str; 7] = ["1/1", "1/2", "1/4", "1/8", "1/12", "1/16", "1/32"];

    /// The divisor applied to both image axes.
    pub fn denominator(&self) -> u32 {
        match self {
            ScaleFactor::Full => 1,
            ScaleFactor::Half => 2,
            ScaleFactor::Quarter => 4,
            ScaleFactor::Eighth => 8,
            ScaleFactor::Twelfth => 12,
            ScaleFactor::Sixteenth => 16,
            ScaleFactor::ThirtySecond => 32,
        }
    }
}

impl FromStr for ScaleFactor {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1/1" => Ok(ScaleFactor::Full),
            "1/2" => Ok(ScaleFactor::Half),
            "1/4" => Ok(ScaleFactor::Quarter),
            "1/8" => Ok(ScaleFactor::Eighth),
            "1/12" => Ok(ScaleFactor::Twelfth),
            "1/16" => Ok(ScaleFactor::Sixteenth),
            "1/32" => Ok(ScaleFactor::ThirtySecond),
            other => Err(CensusError::InvalidConfiguration(format!(
                "unsupported scaling '{other}', expected one of: {}",
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "1/{}", self.denominator())
    }
}

/// Reads, decodes, and downscales an image into a `PixelGrid`.
pub fn load_pixel_grid(path: &Path, scale: ScaleFactor) -> Result<PixelGrid, CensusError> {
    let bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&bytes)?;
    let mut rgb = decoded.to_rgb8();

    let denominator = scale.denominator();
    if denominator > 1 {
        let scaled_width = (rgb.width() / denominator).max(1);
        let scaled_height = (rgb.height() / denominator).max(1);
        log::debug!(
            "downscaling {}x{} to {}x{} ({scale})",
            rgb.width(),
            rgb.height(),
            scaled_width,
            scaled_height
        );
        rgb = image::imageops::resize(&rgb, scaled_width, scaled_height, FilterType::Triangle);
    }

    Ok(PixelGrid::from(&rgb))
}
