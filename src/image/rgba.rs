//! Owned RGBA pixel buffer in row-major layout (stride == width).
//!
//! This is the pixel grid every tracing stage reads. Coordinates are signed on
//! the checked accessors so that callers translating templates or windows can
//! probe outside the image without wrapping.
use crate::color::Rgba;
use crate::graph::{Point, Rect};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl RgbaBuffer {
    /// Fully transparent buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Rgba::TRANSPARENT)
    }

    pub fn filled(w: usize, h: usize, color: Rgba) -> Self {
        Self {
            w,
            h,
            data: vec![color; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = c;
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Pixel at signed coordinates, `None` outside the buffer.
    #[inline]
    pub fn get_checked(&self, x: i64, y: i64) -> Option<Rgba> {
        self.contains(x, y).then(|| self.get(x as usize, y as usize))
    }

    /// Image rectangle `[0, w) × [0, h)`.
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::new(0, 0), Point::new(self.w as i32, self.h as i32))
    }
}

impl crate::image::traits::ImageView for RgbaBuffer {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for RgbaBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

impl From<&image::RgbaImage> for RgbaBuffer {
    fn from(img: &image::RgbaImage) -> Self {
        let data = img.pixels().map(|px| Rgba::from(*px)).collect();
        Self {
            w: img.width() as usize,
            h: img.height() as usize,
            data,
        }
    }
}

impl From<&RgbaBuffer> for image::RgbaImage {
    fn from(buf: &RgbaBuffer) -> Self {
        let mut out = image::RgbaImage::new(buf.w as u32, buf.h as u32);
        for (dst, src) in out.pixels_mut().zip(buf.data.iter()) {
            *dst = (*src).into();
        }
        out
    }
}
