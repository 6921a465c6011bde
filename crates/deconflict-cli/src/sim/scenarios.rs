//! Pre-defined mission scenarios for demonstration.

use deconflict_core::{DeconflictionEngine, Mission, Waypoint};

/// A named scenario: one primary mission checked against simulated flights.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub safety_buffer: f64,
    pub primary: Mission,
    pub simulated: Vec<Mission>,
}

impl Scenario {
    /// Build an engine with every mission of the scenario registered.
    pub fn build_engine(&self) -> DeconflictionEngine {
        let mut engine = DeconflictionEngine::new(self.safety_buffer);
        engine.set_primary(self.primary.clone());
        for flight in &self.simulated {
            engine.add_simulated(flight.clone());
        }
        engine
    }
}

fn path(points: &[(f64, f64, f64)]) -> Vec<Waypoint> {
    points
        .iter()
        .map(|&(x, y, z)| Waypoint::new(x, y, z))
        .collect()
}

/// Diagonal primary with one crossing, one distant and one opposing flight.
pub fn create_basic_scenario() -> Scenario {
    let primary = Mission::new(
        path(&[
            (0.0, 0.0, 10.0),
            (50.0, 20.0, 15.0),
            (100.0, 40.0, 20.0),
            (150.0, 60.0, 15.0),
            (200.0, 80.0, 10.0),
        ]),
        0.0,
        60.0,
        "Primary",
    );

    let simulated = vec![
        Mission::new(
            path(&[
                (50.0, 0.0, 12.0),
                (100.0, 30.0, 18.0),
                (150.0, 60.0, 22.0),
                (200.0, 90.0, 15.0),
            ]),
            10.0,
            50.0,
            "Sim1",
        ),
        Mission::new(
            path(&[
                (0.0, 100.0, 25.0),
                (50.0, 120.0, 30.0),
                (100.0, 140.0, 35.0),
                (150.0, 160.0, 30.0),
            ]),
            5.0,
            55.0,
            "Sim2",
        ),
        Mission::new(
            path(&[
                (180.0, 20.0, 8.0),
                (120.0, 40.0, 12.0),
                (80.0, 60.0, 16.0),
                (40.0, 80.0, 20.0),
            ]),
            15.0,
            45.0,
            "Sim3",
        ),
    ];

    Scenario {
        name: "basic".to_string(),
        safety_buffer: 10.0,
        primary,
        simulated,
    }
}

/// Figure-eight primary with crossing, shadowing and opposing traffic.
pub fn create_complex_scenario() -> Scenario {
    let primary = Mission::new(
        path(&[
            (0.0, 0.0, 20.0),
            (30.0, 30.0, 25.0),
            (60.0, 0.0, 30.0),
            (90.0, -30.0, 25.0),
            (120.0, 0.0, 20.0),
            (90.0, 30.0, 25.0),
            (60.0, 0.0, 30.0),
            (30.0, -30.0, 25.0),
            (0.0, 0.0, 20.0),
        ]),
        0.0,
        120.0,
        "Alpha",
    );

    let simulated = vec![
        Mission::new(
            path(&[(-20.0, -20.0, 22.0), (60.0, 60.0, 28.0), (140.0, 140.0, 35.0)]),
            20.0,
            80.0,
            "Beta",
        ),
        Mission::new(
            path(&[
                (5.0, 5.0, 22.0),
                (35.0, 35.0, 27.0),
                (65.0, 5.0, 32.0),
                (95.0, -25.0, 27.0),
                (125.0, 5.0, 22.0),
            ]),
            10.0,
            110.0,
            "Gamma",
        ),
        Mission::new(
            path(&[
                (120.0, 40.0, 18.0),
                (60.0, 20.0, 24.0),
                (0.0, 40.0, 30.0),
                (-30.0, 20.0, 26.0),
            ]),
            30.0,
            90.0,
            "Delta",
        ),
    ];

    Scenario {
        name: "complex".to_string(),
        safety_buffer: 15.0,
        primary,
        simulated,
    }
}

/// Straight primary with traffic kept apart in altitude, lateral offset and timing.
pub fn create_safe_scenario() -> Scenario {
    let primary = Mission::new(
        path(&[(0.0, 0.0, 20.0), (100.0, 0.0, 20.0), (200.0, 0.0, 20.0)]),
        0.0,
        60.0,
        "Safe1",
    );

    let simulated = vec![
        Mission::new(
            path(&[(0.0, 50.0, 50.0), (100.0, 50.0, 50.0), (200.0, 50.0, 50.0)]),
            0.0,
            60.0,
            "Safe2",
        ),
        Mission::new(
            path(&[(0.0, -50.0, 5.0), (100.0, -50.0, 5.0), (200.0, -50.0, 5.0)]),
            10.0,
            70.0,
            "Safe3",
        ),
        Mission::new(
            path(&[(50.0, -100.0, 25.0), (50.0, 0.0, 25.0), (50.0, 100.0, 25.0)]),
            20.0,
            80.0,
            "Safe4",
        ),
    ];

    Scenario {
        name: "safe".to_string(),
        safety_buffer: 10.0,
        primary,
        simulated,
    }
}

/// Square primary on the ground plane with two crossing flights.
pub fn create_planar_scenario() -> Scenario {
    let primary = Mission::new(
        vec![
            Waypoint::planar(0.0, 0.0),
            Waypoint::planar(50.0, 0.0),
            Waypoint::planar(50.0, 50.0),
            Waypoint::planar(0.0, 50.0),
            Waypoint::planar(0.0, 0.0),
        ],
        0.0,
        80.0,
        "Square",
    );

    let simulated = vec![
        Mission::new(
            vec![Waypoint::planar(-10.0, -10.0), Waypoint::planar(60.0, 60.0)],
            15.0,
            65.0,
            "Diagonal",
        ),
        Mission::new(
            vec![Waypoint::planar(-20.0, 25.0), Waypoint::planar(70.0, 25.0)],
            25.0,
            75.0,
            "Horizontal",
        ),
    ];

    Scenario {
        name: "planar".to_string(),
        safety_buffer: 8.0,
        primary,
        simulated,
    }
}
