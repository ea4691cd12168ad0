// THEORY:
// The `PixelGrid` is the engine's read-only view over a decoded image. It is
// produced exactly once (by decode + optional downscale) and is never mutated
// afterwards, which is what lets every worker read from it concurrently
// without any synchronization at all.
//
// Key architectural principles:
// 1.  **Immutability**: The grid is built once and only ever read. Workers
//     share it behind an `Arc` with zero locking.
// 2.  **Bounds Discipline**: Every access must satisfy `x < width` and
//     `y < height`. The accessor panics on violation rather than returning a
//     sentinel, because an out-of-range read can only come from broken
//     partition math — a programming defect, not a data problem. The worker
//     checks its own coordinates *before* calling `at`, so the engine
//     surfaces such defects as a typed fault instead of a panic.
// 3.  **Flat Storage**: Pixels live in a flat row-major `Vec`, matching the
//     linear index space the partitioner hands out.

use crate::core_modules::pixel::pixel::Pixel;
use image::RgbImage;

/// An immutable, row-major view over a decoded RGB image.
#[derive(Debug)]
pub struct PixelGrid {
    /// The width of the grid in pixels.
    width: u32,
    /// The height of the grid in pixels.
    height: u32,
    /// Flattened row-major pixel data, `width * height` entries long.
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Builds a grid from raw parts. The pixel vector length must equal
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels in the grid.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Random access by coordinates. Panics if `(x, y)` is outside the grid;
    /// callers validate their coordinates first.
    pub fn at(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel access out of range");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(img: &RgbImage) -> Self {
        let pixels = img.pixels().map(Pixel::from).collect();
        Self::new(img.width(), img.height(), pixels)
    }
}
