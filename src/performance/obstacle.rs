use crate::error::TakeoffError;

/// Empirical ratio between climb-out flight-path radius and V_stall^2 / g.
pub const ARC_RADIUS_FACTOR: f64 = 6.96;

/// Radius of the transition arc flown after liftoff, m.
pub fn arc_radius(stall_velocity: f64, gravity: f64) -> f64 {
    ARC_RADIUS_FACTOR * stall_velocity * stall_velocity / gravity
}

/// Horizontal distance from liftoff to clearing `obstacle_height`, m.
///
/// The climb-out is a circular arc tangent to the runway at liftoff:
/// `theta = acos(1 - h / R)`, `d = R sin(theta)`. Heights above the top of
/// the arc (`h > 2R`) cannot be reached and are reported as
/// [`TakeoffError::Geometry`].
pub fn obstacle_clearance_distance(
    stall_velocity: f64,
    obstacle_height: f64,
    gravity: f64,
) -> Result<f64, TakeoffError> {
    let radius = arc_radius(stall_velocity, gravity);
    let geometry_error = || TakeoffError::Geometry {
        obstacle_height,
        arc_radius: radius,
    };

    if !radius.is_finite() || !obstacle_height.is_finite() || obstacle_height < 0.0 {
        return Err(geometry_error());
    }
    if obstacle_height == 0.0 {
        return Ok(0.0);
    }
    if obstacle_height > 2.0 * radius {
        return Err(geometry_error());
    }

    let theta = (1.0 - obstacle_height / radius).acos();
    Ok(radius * theta.sin())
}
