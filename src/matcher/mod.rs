//! Blob matching capability used by node detection.
//!
//! A matcher scores how well its pattern sits at a pixel location and can
//! erase a confirmed match so overlapping candidates lose the shared pixels.

mod icon;

pub use icon::IconMatcher;

use crate::graph::Point;
use crate::image::RgbaBuffer;

pub trait BlobMatcher: Sync {
    /// Match strength in `[0, 1]` with the pattern centred at `loc`; 0 means
    /// no match (including matches clipped by the image border).
    fn score(&self, image: &RgbaBuffer, loc: Point) -> f64;

    /// Removes the matched pixels at `loc`.
    ///
    /// # Panics
    /// Only valid where `score(image, loc) > 0`; implementations panic when
    /// the match would reach outside the image.
    fn erase(&self, image: &mut RgbaBuffer, loc: Point);
}
