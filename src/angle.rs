//! Angle utilities for direction gating.
use nalgebra::Vector2;

/// Unsigned angle between two 2D vectors in radians, in `[0, π]`.
///
/// Returns `None` when either vector has zero length, since no direction is
/// defined.
#[inline]
pub fn angle_between(a: &Vector2<f64>, b: &Vector2<f64>) -> Option<f64> {
    let na = a.norm();
    let nb = b.norm();
    if na == 0.0 || nb == 0.0 {
        return None;
    }
    Some((a.dot(b) / (na * nb)).clamp(-1.0, 1.0).acos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn angle_between_basic() {
        let x = Vector2::new(1.0, 0.0);
        assert!(approx_eq(angle_between(&x, &Vector2::new(0.0, 3.0)).unwrap(), FRAC_PI_2));
        assert!(approx_eq(angle_between(&x, &Vector2::new(-2.0, 0.0)).unwrap(), PI));
        assert!(approx_eq(angle_between(&x, &Vector2::new(5.0, 5.0)).unwrap(), FRAC_PI_4));
    }

    #[test]
    fn angle_uses_both_norms() {
        // Vectors whose y components differ strongly; an angle computed from
        // mixed components would not be symmetric.
        let a = Vector2::new(2.0, 2.6);
        let b = Vector2::new(0.0, 2.0);
        let ab = angle_between(&a, &b).unwrap();
        let ba = angle_between(&b, &a).unwrap();
        assert!(approx_eq(ab, ba));
        assert!(approx_eq(ab, (2.0f64).atan2(2.6)));
    }

    #[test]
    fn zero_vector_has_no_angle() {
        assert!(angle_between(&Vector2::zeros(), &Vector2::new(1.0, 0.0)).is_none());
    }
}
