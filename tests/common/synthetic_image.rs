use netmap_tracer::color::Rgba;
use netmap_tracer::graph::Point;
use netmap_tracer::image::RgbaBuffer;

pub const ICON_COLOR: Rgba = Rgba::opaque(255, 0, 0);

/// Rows of the icon that carry color; the rest is transparent so a line can
/// pass through the icon's middle without affecting its score.
const ICON_ROWS: [i32; 5] = [-5, -4, 3, 4, 5];
const ICON_HALF_WIDTH: i32 = 2;

/// A 5x11 icon: two red bands above the anchor, three below, transparent in
/// between. Anchor is `(2, 5)`.
pub fn router_icon() -> RgbaBuffer {
    let mut icon = RgbaBuffer::new(5, 11);
    for dy in ICON_ROWS {
        for x in 0..5 {
            icon.set(x, (5 + dy) as usize, ICON_COLOR);
        }
    }
    icon
}

/// Stamps the opaque part of [`router_icon`] anchored at `center`.
pub fn stamp_router(image: &mut RgbaBuffer, center: Point) {
    for dy in ICON_ROWS {
        for dx in -ICON_HALF_WIDTH..=ICON_HALF_WIDTH {
            image.set(
                (center.x + dx) as usize,
                (center.y + dy) as usize,
                ICON_COLOR,
            );
        }
    }
}

/// Fills the rectangle `[x0, x1) × [y0, y1)` with `color`.
pub fn fill_rect(image: &mut RgbaBuffer, x0: usize, x1: usize, y0: usize, y1: usize, color: Rgba) {
    for y in y0..y1 {
        for x in x0..x1 {
            image.set(x, y, color);
        }
    }
}

/// White 100x20 diagram with routers at (10, 11) and (40, 11), joined by a
/// four-pixel black bar on rows 8..12.
pub fn two_router_diagram() -> RgbaBuffer {
    let mut image = RgbaBuffer::filled(100, 20, Rgba::WHITE);
    fill_rect(&mut image, 7, 43, 8, 12, Rgba::BLACK);
    stamp_router(&mut image, Point::new(10, 11));
    stamp_router(&mut image, Point::new(40, 11));
    image
}

/// White 60x20 world map with routers at (5, 11) and (54, 11). The bar joining
/// them leaves the right edge and re-enters on the left.
pub fn seam_crossing_diagram() -> RgbaBuffer {
    let mut image = RgbaBuffer::filled(60, 20, Rgba::WHITE);
    fill_rect(&mut image, 0, 10, 8, 12, Rgba::BLACK);
    fill_rect(&mut image, 50, 60, 8, 12, Rgba::BLACK);
    stamp_router(&mut image, Point::new(5, 11));
    stamp_router(&mut image, Point::new(54, 11));
    image
}
