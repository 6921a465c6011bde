//! Schedule inference for waypoints without explicit times.

use crate::models::Mission;

/// Fill in missing waypoint times proportionally to distance flown.
///
/// Each unset waypoint gets `start + (d_i / D) * (end - start)`, where `d_i` is
/// the cumulative polyline distance to it and `D` the total length. A
/// zero-length path puts every unset waypoint at `start_time`. Explicit times
/// are kept as given. A lone waypoint has nothing to interpolate against and
/// lands on `start_time` like any other zero-length path.
pub fn infer_schedule(mission: &mut Mission) {
    if mission.waypoints.is_empty() {
        return;
    }

    let mut cumulative = Vec::with_capacity(mission.waypoints.len());
    let mut total_distance = 0.0;
    cumulative.push(0.0);
    for pair in mission.waypoints.windows(2) {
        total_distance += pair[0].position().distance(&pair[1].position());
        cumulative.push(total_distance);
    }

    let start_time = mission.start_time;
    let duration = mission.duration();

    for (waypoint, distance) in mission.waypoints.iter_mut().zip(cumulative) {
        if waypoint.time.is_some() {
            continue;
        }
        waypoint.time = Some(if total_distance > 0.0 {
            start_time + (distance / total_distance) * duration
        } else {
            start_time
        });
    }
}
