use serde::Serialize;

// ---------------------------------------------------------------------------
// Ground-roll state: velocity and distance along the runway
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KinematicState {
    pub velocity: f64, // m/s
    pub distance: f64, // m from brake release
}

impl KinematicState {
    pub fn new(velocity: f64, distance: f64) -> Self {
        Self { velocity, distance }
    }

    /// Brake release.
    pub fn at_rest() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub time: f64, // s
    pub state: KinematicState,
}

// ---------------------------------------------------------------------------
// Trajectory: time-ordered samples from one integration
// ---------------------------------------------------------------------------

/// Samples produced by one integration run, in time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// Keep samples `0..=index`.
    pub(crate) fn truncate_through(&mut self, index: usize) {
        self.points.truncate(index + 1);
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
