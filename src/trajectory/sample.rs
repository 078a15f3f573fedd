use crate::foundation::error::{WaypathError, WaypathResult};
use crate::foundation::math::{lerp, wrap_angle_diff};
use crate::trajectory::{Pose, TrajectorySample};

/// Timestamps closer than this are treated as a zero-duration segment.
const DEGENERATE_DT: f64 = 1e-9;

/// Returns the interpolated pose at time `t` along `samples`.
///
/// `samples` must be sorted ascending by timestamp; that precondition is not
/// checked. Queries before the first sample or after the last clamp to the
/// corresponding endpoint pose. Interior queries binary-search the bracketing
/// pair, then lerp x/y linearly and heading along the shortest angular path.
///
/// An empty slice is rejected rather than silently misbehaving.
pub fn sample(t: f64, samples: &[TrajectorySample]) -> WaypathResult<Pose> {
    let first = samples
        .first()
        .ok_or_else(|| WaypathError::sampling("cannot sample an empty trajectory"))?;
    let last = &samples[samples.len() - 1];

    if t <= first.timestamp {
        return Ok(first.into());
    }
    if t >= last.timestamp {
        return Ok(last.into());
    }

    // Smallest i >= 1 with samples[i].timestamp >= t. The endpoint clamps above
    // guarantee it exists.
    let i = samples.partition_point(|s| s.timestamp < t).max(1);
    let prev = &samples[i - 1];
    let cur = &samples[i];

    let dt = cur.timestamp - prev.timestamp;
    if dt.abs() < DEGENERATE_DT {
        return Ok(cur.into());
    }

    let frac = (t - prev.timestamp) / dt;
    Ok(Pose {
        x: lerp(prev.x, cur.x, frac),
        y: lerp(prev.y, cur.y, frac),
        heading: prev.heading + frac * wrap_angle_diff(prev.heading, cur.heading),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn at(timestamp: f64, x: f64, y: f64, heading: f64) -> TrajectorySample {
        TrajectorySample {
            timestamp,
            x,
            y,
            heading,
            velocity_x: 0.0,
            velocity_y: 0.0,
            angular_velocity: 0.0,
        }
    }

    #[test]
    fn empty_trajectory_is_an_error() {
        assert!(matches!(
            sample(0.0, &[]),
            Err(WaypathError::Sampling(_))
        ));
    }

    #[test]
    fn clamps_below_first_and_above_last() {
        let samples = [at(0.0, 0.0, 0.0, 0.0), at(1.0, 1.0, 0.0, 0.0), at(2.0, 2.0, 0.0, 0.0)];
        let lo = sample(-5.0, &samples).unwrap();
        assert_eq!(lo, Pose { x: 0.0, y: 0.0, heading: 0.0 });
        let hi = sample(99.0, &samples).unwrap();
        assert_eq!(hi, Pose { x: 2.0, y: 0.0, heading: 0.0 });
    }

    #[test]
    fn midpoint_interpolates_position_and_heading() {
        let samples = [at(0.0, 0.0, 0.0, 0.0), at(2.0, 10.0, 0.0, PI)];
        let p = sample(1.0, &samples).unwrap();
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 0.0).abs() < 1e-12);
        assert!((p.heading - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn heading_takes_short_way_across_wrap() {
        let samples = [at(0.0, 0.0, 0.0, 3.0), at(1.0, 0.0, 0.0, -3.0)];
        let p = sample(0.5, &samples).unwrap();
        // Half the ~0.283 rad hop across +-PI, continuing past 3.0 rather than
        // swinging back through 0.
        let expected = 3.0 + 0.5 * (2.0 * PI - 6.0);
        assert!((p.heading - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_segment_returns_upper_sample() {
        let samples = [
            at(0.0, 0.0, 0.0, 0.0),
            at(1.0, 1.0, 1.0, 0.5),
            at(1.0 + 1e-10, 2.0, 2.0, 1.0),
            at(3.0, 3.0, 3.0, 1.5),
        ];
        // t falls inside a near-zero-duration pair: the upper sample wins
        // without dividing by ~0.
        let p = sample(1.0 + 5e-11, &samples).unwrap();
        assert_eq!(p, Pose { x: 2.0, y: 2.0, heading: 1.0 });
    }

    #[test]
    fn exact_sample_times_return_those_samples() {
        let samples = [at(0.0, 0.0, 0.0, 0.0), at(1.0, 4.0, 2.0, 0.2), at(2.0, 8.0, 4.0, 0.4)];
        let p = sample(1.0, &samples).unwrap();
        assert!((p.x - 4.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }
}
