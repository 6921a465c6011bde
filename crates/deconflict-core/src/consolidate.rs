//! Greedy clustering of raw separation violations into conflict zones.

use crate::geometry::Point3D;
use crate::models::Conflict;
use crate::rules::{CLUSTER_DISTANCE, CLUSTER_TIME_WINDOW_S};

/// Reduce raw per-sample conflicts to conflict zones.
///
/// Single pass in input order. Each record not yet claimed seeds a zone and
/// claims every later unclaimed record within [`CLUSTER_TIME_WINDOW_S`] and
/// [`CLUSTER_DISTANCE`] of the seed itself; membership is not transitive.
/// A zone reports the mean time and location of its members, the smallest
/// member distance, and the seed's drone ids.
pub fn consolidate(raw: &[Conflict]) -> Vec<Conflict> {
    let mut used = vec![false; raw.len()];
    let mut zones = Vec::new();

    for (i, seed) in raw.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let mut members = vec![seed];
        for (j, other) in raw.iter().enumerate().skip(i + 1) {
            if used[j] {
                continue;
            }
            let time_diff = (seed.time - other.time).abs();
            let spatial_diff = seed.location.distance(&other.location);
            if time_diff <= CLUSTER_TIME_WINDOW_S && spatial_diff <= CLUSTER_DISTANCE {
                members.push(other);
                used[j] = true;
            }
        }

        zones.push(zone_from(seed, &members));
    }

    zones
}

fn zone_from(seed: &Conflict, members: &[&Conflict]) -> Conflict {
    let count = members.len() as f64;
    let mean = |f: fn(&Conflict) -> f64| members.iter().map(|c| f(c)).sum::<f64>() / count;

    let avg_time = mean(|c| c.time);
    let location = Point3D::new(
        mean(|c| c.location.x),
        mean(|c| c.location.y),
        mean(|c| c.location.z),
    );
    let min_distance = members
        .iter()
        .map(|c| c.distance)
        .fold(f64::INFINITY, f64::min);

    Conflict {
        location,
        time: avg_time,
        primary_drone: seed.primary_drone.clone(),
        conflicting_drone: seed.conflicting_drone.clone(),
        distance: min_distance,
        description: format!(
            "Conflict zone at time {avg_time:.1}s: minimum separation {min_distance:.2} units"
        ),
    }
}
