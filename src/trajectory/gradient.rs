use crate::trajectory::TrajectorySample;

/// Default path color when no gradient metric is applied.
const SELECT_COLOR: &str = "var(--select-yellow)";

/// Reference speed (m/s) that maps to the top of the velocity hue range.
const REFERENCE_SPEED: f64 = 5.0;

/// Reference magnitude for the acceleration and centripetal metrics.
const REFERENCE_ACCEL: f64 = 10.0;

/// Nominal solver time step (s) the interval-dt metric is centered on.
const NOMINAL_DT: f64 = 0.1;

/// A selectable pure metric mapping a sample's context to a display color.
///
/// Every metric tolerates boundary indices of a non-empty slice; none consult
/// any state outside the sample data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathGradient {
    None,
    Progress,
    Velocity,
    Centripetal,
    Acceleration,
    IntervalDt,
}

impl PathGradient {
    pub const ALL: [PathGradient; 6] = [
        PathGradient::None,
        PathGradient::Progress,
        PathGradient::Velocity,
        PathGradient::Centripetal,
        PathGradient::Acceleration,
        PathGradient::IntervalDt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Progress => "Progress",
            Self::Velocity => "Velocity",
            Self::Centripetal => "Centripetal",
            Self::Acceleration => "Acceleration",
            Self::IntervalDt => "IntervalDt",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::None => "No path gradient applied.",
            Self::Progress => "Further progress through the path is shown as red.",
            Self::Velocity => "Faster robot velocity is shown as green.",
            Self::Centripetal => "Tighter turns at speed are shown as green.",
            Self::Acceleration => "Faster changes of speed are shown as green.",
            Self::IntervalDt => "Deviation from the nominal sample interval is highlighted.",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    /// Returns the display color for `samples[index]` under this metric.
    pub fn color_for(self, index: usize, samples: &[TrajectorySample]) -> String {
        match self {
            Self::None => SELECT_COLOR.to_owned(),
            Self::Progress => hue(1.0 - index as f64 / samples.len() as f64),
            Self::Velocity => {
                let t = (samples[index].speed() / REFERENCE_SPEED).min(1.0);
                hue(t)
            }
            Self::Centripetal => hue(centripetal_t(index, samples)),
            Self::Acceleration => hue(acceleration_t(index, samples)),
            Self::IntervalDt => hue(interval_dt_t(index, samples)),
        }
    }
}

fn hue(t: f64) -> String {
    format!("hsl({}, 100%, 50%)", 100.0 * t.clamp(0.0, 1.0))
}

/// Local curvature estimate via the circumradius of the triangle formed by the
/// previous, current, and next points, combined with local speed. First and
/// last points have no triangle and read as neutral.
fn centripetal_t(index: usize, samples: &[TrajectorySample]) -> f64 {
    if index == 0 || index + 1 >= samples.len() {
        return 0.0;
    }
    let a = &samples[index - 1];
    let b = &samples[index];
    let c = &samples[index + 1];

    let ab = (b.x - a.x).hypot(b.y - a.y);
    let bc = (c.x - b.x).hypot(c.y - b.y);
    let ca = (a.x - c.x).hypot(a.y - c.y);

    // Heron's formula; the max(0) guards tiny negative round-off for
    // near-collinear points.
    let s = (ab + bc + ca) / 2.0;
    let area = (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt();
    if area < 1e-12 {
        // Straight line: infinite radius, no centripetal load.
        return 0.0;
    }

    let circumradius = (ab * bc * ca) / (4.0 * area);
    let speed = b.speed();
    (speed * speed / circumradius / REFERENCE_ACCEL).clamp(0.0, 1.0)
}

/// Finite-difference estimate of speed change over elapsed time. Endpoints use
/// their single available neighbor.
fn acceleration_t(index: usize, samples: &[TrajectorySample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let (prev, cur) = if index + 1 < samples.len() {
        (&samples[index], &samples[index + 1])
    } else {
        (&samples[index - 1], &samples[index])
    };

    let dt = cur.timestamp - prev.timestamp;
    if dt.abs() < 1e-9 {
        return 0.0;
    }
    let accel = (cur.speed() - prev.speed()).abs() / dt;
    (accel / REFERENCE_ACCEL).clamp(0.0, 1.0)
}

/// Deviation of the local time step from the nominal solver step. The last
/// sample reads its preceding interval.
fn interval_dt_t(index: usize, samples: &[TrajectorySample]) -> f64 {
    if samples.len() < 2 {
        return 0.5;
    }
    let dt = if index + 1 < samples.len() {
        samples[index + 1].timestamp - samples[index].timestamp
    } else {
        samples[index].timestamp - samples[index - 1].timestamp
    };
    (1.5 - dt / NOMINAL_DT).clamp(0.0, 1.0)
}
