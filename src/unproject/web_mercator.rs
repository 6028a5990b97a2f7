//! Inverse spherical web-Mercator (EPSG:3857) for axis-aligned world maps.
use super::LatLon;
use crate::graph::{Point, Rect};
use std::f64::consts::FRAC_PI_2;
use std::sync::OnceLock;

/// WGS84 semi-major axis used by web-Mercator, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

fn forward_x(lon_deg: f64) -> f64 {
    EARTH_RADIUS_M * lon_deg.to_radians()
}

/// Width of the projected world (-180° to 180°) in metres, computed once.
pub fn web_mercator_width() -> f64 {
    static WIDTH: OnceLock<f64> = OnceLock::new();
    *WIDTH.get_or_init(|| forward_x(-180.0).abs() + forward_x(180.0).abs())
}

/// Pixel → lat/lon mapping for an image showing the whole world horizontally.
#[derive(Clone, Debug, PartialEq)]
pub struct WebMercator {
    pub bounds: Rect,
    /// Columns missing from the left edge of the image.
    pub extra_margin_left: i32,
    /// Columns missing from the right edge of the image.
    pub extra_margin_right: i32,
    /// Multiplier applied to y offsets before inversion.
    pub scale_y: f64,
    /// Prime meridian column, in margin-extended coordinates.
    pub prime_meridian_x: i32,
    /// Equator row, relative to `bounds.min.y`.
    pub equator_y: i32,
}

impl WebMercator {
    /// Prime meridian at the centre of the margin-extended width, equator at
    /// half height.
    pub fn centered(bounds: Rect, extra_margin_left: i32, extra_margin_right: i32) -> Self {
        Self {
            bounds,
            extra_margin_left,
            extra_margin_right,
            scale_y: 1.0,
            prime_meridian_x: (bounds.width() + extra_margin_left + extra_margin_right) / 2,
            equator_y: bounds.height() / 2,
        }
    }

    /// Metres per pixel.
    fn scaling_factor(&self) -> f64 {
        let width = self.bounds.width() + self.extra_margin_left + self.extra_margin_right;
        web_mercator_width() / f64::from(width)
    }

    pub fn to_lat_lon(&self, p: Point) -> LatLon {
        let x = f64::from(p.x - self.bounds.min.x + self.extra_margin_left - self.prime_meridian_x);
        // Image y grows downward; northing grows upward.
        let y = f64::from(self.equator_y - (p.y - self.bounds.min.y)) * self.scale_y;

        let c = self.scaling_factor();
        let easting = x * c;
        let northing = y * c;
        LatLon {
            lat: (2.0 * (northing / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2).to_degrees(),
            lon: (easting / EARTH_RADIUS_M).to_degrees(),
        }
    }
}
