//! Human-readable conflict report.

use std::fmt::Write;

use deconflict_core::CheckReport;

/// Render a check result the way the CLI prints it.
pub fn format_report(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", report.status);
    let _ = writeln!(out, "Details: {}", report.details);

    if !report.conflicts.is_empty() {
        let _ = writeln!(out, "\nConflict Details:");
        for (i, conflict) in report.conflicts.iter().enumerate() {
            let _ = writeln!(out, "  Conflict {}:", i + 1);
            let _ = writeln!(out, "    Time: {:.1}s", conflict.time);
            let _ = writeln!(
                out,
                "    Location: ({:.1}, {:.1}, {:.1})",
                conflict.location.x, conflict.location.y, conflict.location.z
            );
            let _ = writeln!(out, "    Minimum Distance: {:.2} units", conflict.distance);
            let _ = writeln!(out, "    Conflicting Drone: {}", conflict.conflicting_drone);
            let _ = writeln!(out, "    Description: {}", conflict.description);
        }
    }

    out
}
