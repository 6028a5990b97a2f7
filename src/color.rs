//! Four-channel color values and the normalized color distance used by both
//! the icon matcher and the line classifier.

/// 8-bit RGBA color. `a == 0` means fully transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(c: Rgba) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

#[inline]
fn sq_normal_diff(a: u8, b: u8) -> f64 {
    let t = (f64::from(a) - f64::from(b)) / 255.0;
    t * t
}

/// Normalized Euclidean distance between two colors, in `[0, 1]`.
///
/// Only the red, green and blue channels contribute; the alpha term compares
/// `a` against itself and is therefore always zero.
#[inline]
pub fn color_distance(a: Rgba, b: Rgba) -> f64 {
    let mut sum = sq_normal_diff(a.r, b.r);
    sum += sq_normal_diff(a.g, b.g);
    sum += sq_normal_diff(a.b, b.b);
    sum += sq_normal_diff(a.a, a.a);
    sum.sqrt() / 2.0
}

/// Parses `#rrggbb` or `#rgb` into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<Rgba, String> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| format!("Invalid color {s:?}: missing leading '#'"))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid color {s:?}: non-hex digit"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| format!("Invalid color {s:?}: {e}"))
    };
    match digits.len() {
        6 => Ok(Rgba::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // Short form doubles each digit: #abc == #aabbcc.
        3 => Ok(Rgba::opaque(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => Err(format!(
            "Invalid color {s:?}: length must be 7 or 4 including '#'"
        )),
    }
}
