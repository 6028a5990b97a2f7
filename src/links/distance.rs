use crate::graph::Point;

/// Pixel distance used by the run tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// Plain Euclidean distance.
    Euclidean,
    /// Euclidean distance on a cylinder of circumference `width`: the
    /// horizontal offset may also be measured the other way around the image.
    WrapX { width: i32 },
}

impl Metric {
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        match *self {
            Metric::Euclidean => a.dist(b),
            Metric::WrapX { width } => wrap_x_distance(a, b, width),
        }
    }
}

/// Minimum of the direct distance and the distance going around the image
/// horizontally.
pub fn wrap_x_distance(a: Point, b: Point, width: i32) -> f64 {
    let direct = a.dist(b);
    let (lo, hi) = if a.x <= b.x { (a, b) } else { (b, a) };
    let dx = f64::from(width + lo.x - hi.x);
    let dy = f64::from(lo.y - hi.y);
    direct.min(dx.hypot(dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_takes_short_way_around() {
        let a = Point::new(1, 0);
        let b = Point::new(98, 0);
        assert_eq!(wrap_x_distance(a, b, 100), 3.0);
        assert_eq!(wrap_x_distance(b, a, 100), 3.0);
    }

    #[test]
    fn wrap_matches_direct_when_closer() {
        let a = Point::new(10, 5);
        let b = Point::new(13, 9);
        assert_eq!(wrap_x_distance(a, b, 100), 5.0);
        assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
    }

    #[test]
    fn wrap_keeps_vertical_component() {
        let d = Metric::WrapX { width: 50 }.distance(Point::new(0, 0), Point::new(46, 3));
        assert_eq!(d, 5.0);
    }
}
