//! Position of a drone along its mission at an arbitrary instant.

use crate::geometry::Point3D;
use crate::models::Mission;

/// Linearly interpolated position of `mission` at time `t`.
///
/// Returns `None` outside `[start_time, end_time]` or for a mission without
/// waypoints. The first waypoint pair whose times bracket `t` is used; a pair
/// with equal times yields its first waypoint. When no pair brackets `t` the
/// last waypoint is returned as-is, with no extrapolation.
pub fn interpolate(mission: &Mission, t: f64) -> Option<Point3D> {
    if t < mission.start_time || t > mission.end_time {
        return None;
    }
    let last = mission.waypoints.last()?;

    for pair in mission.waypoints.windows(2) {
        let (w1, w2) = (&pair[0], &pair[1]);
        let (Some(t1), Some(t2)) = (w1.time, w2.time) else {
            continue;
        };
        if t1 <= t && t <= t2 {
            let u = if t2 == t1 { 0.0 } else { (t - t1) / (t2 - t1) };
            return Some(w1.position().lerp(&w2.position(), u));
        }
    }

    Some(last.position())
}
