use super::BlobMatcher;
use crate::color::{color_distance, Rgba};
use crate::graph::Point;
use crate::image::RgbaBuffer;

/// Template matcher driven by an icon image.
///
/// Transparent icon pixels are a don't-care mask. The icon is anchored at its
/// centre `(w / 2, h / 2)`.
#[derive(Clone, Debug)]
pub struct IconMatcher {
    /// Opaque icon pixels as offsets from the anchor.
    taps: Vec<IconTap>,
}

#[derive(Clone, Copy, Debug)]
struct IconTap {
    dx: i64,
    dy: i64,
    color: Rgba,
}

impl IconMatcher {
    pub fn new(icon: &RgbaBuffer) -> Self {
        let off_x = (icon.w / 2) as i64;
        let off_y = (icon.h / 2) as i64;
        let mut taps = Vec::with_capacity(icon.data.len());
        for y in 0..icon.h {
            for x in 0..icon.w {
                let color = icon.get(x, y);
                if color.is_transparent() {
                    continue;
                }
                taps.push(IconTap {
                    dx: x as i64 - off_x,
                    dy: y as i64 - off_y,
                    color,
                });
            }
        }
        Self { taps }
    }

    /// Number of opaque icon pixels compared per score.
    pub fn opaque_count(&self) -> usize {
        self.taps.len()
    }
}

impl BlobMatcher for IconMatcher {
    fn score(&self, image: &RgbaBuffer, loc: Point) -> f64 {
        if self.taps.is_empty() {
            return 0.0;
        }
        let mut sum = 0.0;
        for tap in &self.taps {
            let Some(px) = image.get_checked(i64::from(loc.x) + tap.dx, i64::from(loc.y) + tap.dy)
            else {
                return 0.0;
            };
            if !px.is_transparent() {
                sum += 1.0 - color_distance(tap.color, px);
            }
        }
        sum / self.taps.len() as f64
    }

    fn erase(&self, image: &mut RgbaBuffer, loc: Point) {
        for tap in &self.taps {
            let x = i64::from(loc.x) + tap.dx;
            let y = i64::from(loc.y) + tap.dy;
            assert!(
                image.contains(x, y),
                "erase at ({}, {}) reaches outside the image; only erase where score > 0",
                loc.x,
                loc.y
            );
            image.set(x as usize, y as usize, Rgba::TRANSPARENT);
        }
    }
}
