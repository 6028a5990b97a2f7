//! Per-pixel line classification by mean color accuracy over a square window.
use crate::color::{color_distance, Rgba};
use crate::graph::Point;
use crate::image::RgbaBuffer;

#[derive(Clone, Debug)]
pub struct LineClassifier {
    pub color: Rgba,
    /// Minimum mean accuracy (`1 - color distance`) to accept a pixel.
    pub min_accuracy: f64,
    /// Window half-width `r`; the window is `[x - r, x + r) × [y - r, y + r)`.
    pub half_width: usize,
}

/// Classified line pixels in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMask {
    pub points: Vec<Point>,
}

impl LineMask {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Renders the mask as black line pixels on white.
    pub fn to_image(&self, w: usize, h: usize) -> RgbaBuffer {
        let mut out = RgbaBuffer::filled(w, h, Rgba::WHITE);
        for p in &self.points {
            out.set(p.x as usize, p.y as usize, Rgba::BLACK);
        }
        out
    }
}

impl LineClassifier {
    pub fn new(color: Rgba, min_accuracy: f64, half_width: usize) -> Self {
        Self {
            color,
            min_accuracy,
            half_width,
        }
    }

    /// Whether `(x, y)` looks like part of a line. Windows that reach outside
    /// the image are rejected.
    pub fn is_line_pixel(&self, image: &RgbaBuffer, x: usize, y: usize) -> bool {
        let r = self.half_width;
        if x < r || y < r || x + r > image.w || y + r > image.h {
            return false;
        }
        let mut sum = 0.0;
        let mut num = 0usize;
        for j in y - r..y + r {
            for i in x - r..x + r {
                let px = image.get(i, j);
                if px.is_transparent() {
                    continue;
                }
                sum += 1.0 - color_distance(self.color, px);
                num += 1;
            }
        }
        num > 0 && sum / num as f64 >= self.min_accuracy
    }

    fn classify_row(&self, image: &RgbaBuffer, y: usize) -> Vec<Point> {
        (0..image.w)
            .filter(|&x| self.is_line_pixel(image, x, y))
            .map(|x| Point::new(x as i32, y as i32))
            .collect()
    }

    /// Classifies every pixel of `image`.
    pub fn classify(&self, image: &RgbaBuffer) -> LineMask {
        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<Point>> = {
            use rayon::prelude::*;
            (0..image.h)
                .into_par_iter()
                .map(|y| self.classify_row(image, y))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<Point>> = (0..image.h).map(|y| self.classify_row(image, y)).collect();

        LineMask {
            points: rows.into_iter().flatten().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_bar(w: usize, h: usize, y0: usize, y1: usize) -> RgbaBuffer {
        let mut image = RgbaBuffer::filled(w, h, Rgba::WHITE);
        for y in y0..y1 {
            for x in 0..w {
                image.set(x, y, Rgba::BLACK);
            }
        }
        image
    }

    #[test]
    fn classifies_thick_bar() {
        let image = horizontal_bar(20, 12, 4, 8);
        let classifier = LineClassifier::new(Rgba::BLACK, 0.95, 2);
        let mask = classifier.classify(&image);
        // Window rows [y-2, y+2) must all be black: y = 6 only.
        assert!(!mask.is_empty());
        assert!(mask.points.iter().all(|p| p.y == 6), "{:?}", mask.points);
        // x in [2, 18] keeps the window inside the image.
        assert_eq!(mask.len(), 17);
        assert_eq!(mask.points.first(), Some(&Point::new(2, 6)));
        assert_eq!(mask.points.last(), Some(&Point::new(18, 6)));

        let rendered = mask.to_image(20, 12);
        assert_eq!(rendered.get(2, 6), Rgba::BLACK);
        assert_eq!(rendered.get(1, 6), Rgba::WHITE);
        assert_eq!(rendered.get(2, 5), Rgba::WHITE);
    }

    #[test]
    fn classify_matches_per_pixel_scan() {
        // Row-parallel and sequential builds must both reproduce a plain
        // row-major scan.
        let mut image = horizontal_bar(31, 17, 5, 10);
        for y in 0..17 {
            image.set(12, y, Rgba::BLACK);
            image.set(13, y, Rgba::opaque(40, 40, 40));
        }
        image.set(20, 7, Rgba::TRANSPARENT);
        let classifier = LineClassifier::new(Rgba::BLACK, 0.8, 2);
        let mut expected = Vec::new();
        for y in 0..image.h {
            for x in 0..image.w {
                if classifier.is_line_pixel(&image, x, y) {
                    expected.push(Point::new(x as i32, y as i32));
                }
            }
        }
        assert!(!expected.is_empty());
        assert_eq!(classifier.classify(&image).points, expected);
    }

    #[test]
    fn windows_touching_border_are_rejected() {
        let image = RgbaBuffer::filled(6, 6, Rgba::BLACK);
        let classifier = LineClassifier::new(Rgba::BLACK, 0.9, 1);
        assert!(!classifier.is_line_pixel(&image, 0, 3));
        assert!(classifier.is_line_pixel(&image, 5, 5));
        let classifier = LineClassifier::new(Rgba::BLACK, 0.9, 2);
        assert!(!classifier.is_line_pixel(&image, 5, 5));
        assert!(classifier.is_line_pixel(&image, 4, 4));
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut image = RgbaBuffer::new(8, 8);
        image.set(3, 3, Rgba::BLACK);
        let classifier = LineClassifier::new(Rgba::BLACK, 0.99, 1);
        // Window [2,4)x[2,4) contains one opaque matching pixel.
        assert!(classifier.is_line_pixel(&image, 3, 3));
        // Fully transparent window never matches.
        assert!(!classifier.is_line_pixel(&image, 6, 6));
    }

    #[test]
    fn zero_half_width_never_matches() {
        let image = RgbaBuffer::filled(4, 4, Rgba::BLACK);
        let classifier = LineClassifier::new(Rgba::BLACK, 0.5, 0);
        assert!(classifier.classify(&image).is_empty());
    }
}
