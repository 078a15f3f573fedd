use std::f64::consts::PI;

/// Wraps an angle difference into `(-PI, PI]` so interpolation between two
/// headings always takes the shortest way around the circle.
pub(crate) fn wrap_angle_diff(from: f64, to: f64) -> f64 {
    let tau = 2.0 * PI;
    let mut d = (to - from) % tau;
    if d <= -PI {
        d += tau;
    } else if d > PI {
        d -= tau;
    }
    d
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_way_within_half_turn() {
        assert!((wrap_angle_diff(0.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((wrap_angle_diff(1.0, 0.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn crosses_pi_boundary() {
        // 3.0 -> -3.0 is a short hop of ~0.283 rad across +-PI, not a -6.0 sweep
        // back through zero.
        let d = wrap_angle_diff(3.0, -3.0);
        assert!((d - (2.0 * PI - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn half_turn_maps_to_positive_pi() {
        let d = wrap_angle_diff(0.0, PI);
        assert!((d - PI).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
