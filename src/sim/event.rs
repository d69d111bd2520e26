use super::state::{Trajectory, TrajectoryPoint};

// ---------------------------------------------------------------------------
// Trajectory events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    Liftoff,
}

/// First sample at which a detector fired.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryEvent {
    pub index: usize,
    pub kind: EventKind,
    pub point: TrajectoryPoint,
}

/// Passive detector fed with trajectory samples in time order.
pub trait EventDetector {
    fn check(&mut self, point: &TrajectoryPoint) -> Option<EventKind>;
}

/// Fires once, on the first sample whose velocity is at or above the target.
pub struct SpeedThresholdDetector {
    pub velocity: f64,
    fired: bool,
}

impl SpeedThresholdDetector {
    pub fn new(velocity: f64) -> Self {
        Self { velocity, fired: false }
    }
}

impl EventDetector for SpeedThresholdDetector {
    fn check(&mut self, point: &TrajectoryPoint) -> Option<EventKind> {
        if self.fired || point.state.velocity < self.velocity {
            return None;
        }
        self.fired = true;
        Some(EventKind::Liftoff)
    }
}

/// Scan `trajectory` and return the first event reported by `detector`.
pub fn detect_first(
    trajectory: &Trajectory,
    detector: &mut dyn EventDetector,
) -> Option<TrajectoryEvent> {
    trajectory.iter().enumerate().find_map(|(index, point)| {
        detector.check(point).map(|kind| TrajectoryEvent {
            index,
            kind,
            point: *point,
        })
    })
}

// ---------------------------------------------------------------------------
// Liftoff truncation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LiftoffOutcome {
    /// Distance at the liftoff sample, or at the last sample when liftoff
    /// was never reached.
    pub ground_roll_distance: f64,
    pub trajectory: Trajectory,
    /// False when the horizon elapsed before liftoff speed: the distance is
    /// then only what was covered inside the simulated window.
    pub reached: bool,
    pub liftoff_time: Option<f64>,
}

/// Cut `trajectory` at the first sample with `velocity >= liftoff_velocity`.
///
/// The returned trajectory keeps samples `0..=i` where `i` is the liftoff
/// sample: the liftoff point itself is included, so the last kept sample
/// carries the reported ground-roll distance. If no sample qualifies, the
/// full trajectory comes back with `reached = false`.
pub fn truncate_at_liftoff(mut trajectory: Trajectory, liftoff_velocity: f64) -> LiftoffOutcome {
    let mut detector = SpeedThresholdDetector::new(liftoff_velocity);

    match detect_first(&trajectory, &mut detector) {
        Some(event) => {
            trajectory.truncate_through(event.index);
            LiftoffOutcome {
                ground_roll_distance: event.point.state.distance,
                trajectory,
                reached: true,
                liftoff_time: Some(event.point.time),
            }
        }
        None => LiftoffOutcome {
            ground_roll_distance: trajectory.last().map_or(0.0, |p| p.state.distance),
            trajectory,
            reached: false,
            liftoff_time: None,
        },
    }
}
