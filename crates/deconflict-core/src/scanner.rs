//! Fixed-step sampling of the primary window for separation violations.

use tracing::trace;

use crate::interpolate::interpolate;
use crate::models::{Conflict, Mission};
use crate::rules::SAMPLE_STEP_S;

/// Sample `primary` every [`SAMPLE_STEP_S`] and report each instant where a
/// simulated flight is closer than `safety_buffer`.
///
/// Samples start at `primary.start_time` and the step is accumulated, so the
/// final sample may land just short of `end_time`. Records come out
/// time-major, then in `simulated` order; consolidation depends on that.
pub fn scan(primary: &Mission, simulated: &[Mission], safety_buffer: f64) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let mut current_time = primary.start_time;
    while current_time <= primary.end_time {
        let t = current_time;
        current_time += SAMPLE_STEP_S;

        let Some(primary_pos) = interpolate(primary, t) else {
            continue;
        };

        for flight in simulated {
            let Some(sim_pos) = interpolate(flight, t) else {
                continue;
            };

            let distance = primary_pos.distance(&sim_pos);
            if distance < safety_buffer {
                trace!(
                    time = t,
                    conflicting_drone = %flight.drone_id,
                    distance,
                    "separation violation"
                );
                conflicts.push(Conflict {
                    location: primary_pos.midpoint(&sim_pos),
                    time: t,
                    primary_drone: primary.drone_id.clone(),
                    conflicting_drone: flight.drone_id.clone(),
                    distance,
                    description: format!(
                        "Conflict at time {t:.1}s: distance {distance:.2} < safety buffer {safety_buffer:?}"
                    ),
                });
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3D;
    use crate::models::Waypoint;

    fn hover(id: &str, x: f64, start: f64, end: f64) -> Mission {
        Mission::new(
            vec![
                Waypoint::at(x, 0.0, 0.0, start),
                Waypoint::at(x, 0.0, 0.0, end),
            ],
            start,
            end,
            id,
        )
    }

    #[test]
    fn test_buffer_is_strict() {
        let primary = hover("P", 0.0, 0.0, 1.0);
        let at_buffer = hover("S", 10.0, 0.0, 1.0);
        assert!(scan(&primary, &[at_buffer], 10.0).is_empty());

        let just_inside = hover("S", 10.0 - 1e-9, 0.0, 1.0);
        assert!(!scan(&primary, &[just_inside], 10.0).is_empty());
    }

    #[test]
    fn test_raw_record_contents() {
        let primary = hover("P", 0.0, 0.0, 0.05);
        let sim = hover("S", 4.0, 0.0, 0.05);
        let conflicts = scan(&primary, &[sim], 10.0);
        assert_eq!(conflicts.len(), 1);

        let c = &conflicts[0];
        assert_eq!(c.location, Point3D::new(2.0, 0.0, 0.0));
        assert_eq!(c.time, 0.0);
        assert_eq!(c.primary_drone, "P");
        assert_eq!(c.conflicting_drone, "S");
        assert_eq!(c.distance, 4.0);
        assert_eq!(
            c.description,
            "Conflict at time 0.0s: distance 4.00 < safety buffer 10.0"
        );
    }

    #[test]
    fn test_one_record_per_sample_and_flight_in_order() {
        let primary = hover("P", 0.0, 0.0, 0.25);
        let a = hover("A", 1.0, 0.0, 0.25);
        let b = hover("B", 2.0, 0.0, 0.25);
        let conflicts = scan(&primary, &[a, b], 10.0);

        // Samples at 0.0, 0.1, 0.2; two flights each.
        let order: Vec<&str> = conflicts
            .iter()
            .map(|c| c.conflicting_drone.as_str())
            .collect();
        assert_eq!(order, vec!["A", "B", "A", "B", "A", "B"]);
        assert!(conflicts.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn test_flight_outside_window_skipped_others_checked() {
        let primary = hover("P", 0.0, 0.0, 1.0);
        let late = hover("LATE", 1.0, 5.0, 6.0);
        let present = hover("NOW", 1.0, 0.0, 1.0);
        let conflicts = scan(&primary, &[late, present], 10.0);
        assert!(!conflicts.is_empty());
        assert!(conflicts.iter().all(|c| c.conflicting_drone == "NOW"));
    }

    #[test]
    fn test_accumulated_samples() {
        let primary = hover("P", 0.0, 0.0, 60.0);
        let sim = hover("S", 1.0, 0.0, 60.0);
        let conflicts = scan(&primary, &[sim], 10.0);
        // Rounding drift in the summed step overshoots 60.0, so the last sample is ~59.9.
        assert_eq!(conflicts.len(), 600);
        assert!((conflicts[599].time - 59.9).abs() < 1e-9);
    }
}
