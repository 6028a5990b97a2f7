//! Debug rendering of traced graphs.
//!
//! Links are drawn along their raw traces (or as straight segments when no
//! trace is stored) and nodes as filled discs. The drawing can be blended over
//! the source image to eyeball the extraction.
use crate::color::Rgba;
use crate::graph::{Graph, Point};
use crate::image::{ImageView, ImageViewMut, RgbaBuffer};

pub const NODE_COLOR: Rgba = Rgba::opaque(255, 165, 0);
pub const LINK_COLOR: Rgba = Rgba::opaque(50, 200, 10);
pub const NODE_RADIUS: i32 = 10;
pub const LINK_HALF_WIDTH: i32 = 1;
/// Opacity of the drawing when overlaid on the source image.
pub const OVERLAY_ALPHA: f64 = 0.76;

/// Renders `graph` on a transparent canvas the size of its bounds.
pub fn draw_graph(graph: &Graph) -> RgbaBuffer {
    let w = graph.bounds.width().max(0) as usize;
    let h = graph.bounds.height().max(0) as usize;
    let origin = graph.bounds.min;
    let mut canvas = RgbaBuffer::new(w, h);
    let local = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);

    for link in &graph.links {
        if link.points.len() < 2 {
            let (Some(&a), Some(&b)) = (graph.nodes.get(link.src), graph.nodes.get(link.dst)) else {
                continue;
            };
            draw_segment(&mut canvas, local(a), local(b), LINK_HALF_WIDTH, LINK_COLOR);
            continue;
        }
        for pair in link.points.windows(2) {
            draw_segment(
                &mut canvas,
                local(pair[0]),
                local(pair[1]),
                LINK_HALF_WIDTH,
                LINK_COLOR,
            );
        }
    }
    for &n in &graph.nodes {
        fill_disc(&mut canvas, local(n), NODE_RADIUS, NODE_COLOR);
    }
    canvas
}

/// Blends the opaque pixels of `drawing` over a copy of `base`.
pub fn overlay_on(drawing: &RgbaBuffer, base: &RgbaBuffer, alpha: f64) -> RgbaBuffer {
    let mut out = base.clone();
    let mix = |t: u8, b: u8| (alpha * f64::from(t) + (1.0 - alpha) * f64::from(b)).round() as u8;
    for (y, src) in drawing.rows().take(out.height()).enumerate() {
        for (dst, &top) in out.row_mut(y).iter_mut().zip(src) {
            if top.is_transparent() {
                continue;
            }
            *dst = Rgba::new(
                mix(top.r, dst.r),
                mix(top.g, dst.g),
                mix(top.b, dst.b),
                dst.a.max(top.a),
            );
        }
    }
    out
}

fn put(canvas: &mut RgbaBuffer, x: i32, y: i32, c: Rgba) {
    if canvas.contains(i64::from(x), i64::from(y)) {
        canvas.set(x as usize, y as usize, c);
    }
}

fn fill_disc(canvas: &mut RgbaBuffer, center: Point, radius: i32, c: Rgba) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(canvas, center.x + dx, center.y + dy, c);
            }
        }
    }
}

/// Bresenham segment stamped with a square brush.
fn draw_segment(canvas: &mut RgbaBuffer, a: Point, b: Point, half_width: i32, c: Rgba) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);
    loop {
        for oy in -half_width..=half_width {
            for ox in -half_width..=half_width {
                put(canvas, x + ox, y + oy, c);
            }
        }
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
