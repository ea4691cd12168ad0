// THEORY:
// The `Pixel` module is the most fundamental building block of the histogram
// engine. It is designed as a "dumb" data container: its only responsibility
// is to represent the raw RGB data of a single pixel accurately and cheaply.
//
// Key architectural principles:
// 1.  **Data Purity**: It holds the raw `u8` channel values without any
//     interpretation. It knows nothing about other pixels or about how often
//     it occurs in an image.
// 2.  **Canonical Keys**: The `ColorKey` type is the bridge between a pixel
//     and the histogram. Two pixels with identical channel values always
//     produce equal keys, no matter which worker observed them — this is the
//     property that makes the parallel merge correct.
// 3.  **Quantization at the Boundary**: Near-duplicate colors can be merged
//     by bucketing each channel with a fixed width *before* the key is built.
//     Doing it here means every downstream structure (local histograms, the
//     shared histogram, the ranked output) agrees on the bucketed value.
//
// This module intentionally separates "what a color is" from "how often a
// color occurs," which is handled by the histogram module.

pub mod pixel {
    pub type Channel = u8;
    pub type Count = u64;

    /// A "dumb" data container representing a single RGB pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }
    }

    impl From<&image::Rgb<u8>> for Pixel {
        fn from(rgb: &image::Rgb<u8>) -> Self {
            Pixel::new(rgb.0[0], rgb.0[1], rgb.0[2])
        }
    }

    /// The canonical, hashable bucket identifier for a histogram entry.
    ///
    /// Derives `Ord` (lexicographic over red, green, blue) so that ranking
    /// has a deterministic secondary key when counts tie.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ColorKey {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
    }

    impl ColorKey {
        /// Builds a key from a pixel, bucketing each channel by
        /// `quantization_offset`. An offset of 0 or 1 leaves the channel
        /// values untouched.
        pub fn from_pixel(pixel: &Pixel, quantization_offset: Channel) -> Self {
            ColorKey {
                red: Self::bucket(pixel.red, quantization_offset),
                green: Self::bucket(pixel.green, quantization_offset),
                blue: Self::bucket(pixel.blue, quantization_offset),
            }
        }

        #[inline]
        fn bucket(channel: Channel, width: Channel) -> Channel {
            if width > 1 {
                channel - (channel % width)
            } else {
                channel
            }
        }
    }

    impl std::fmt::Display for ColorKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{},{},{}", self.red, self.green, self.blue)
        }
    }

}
