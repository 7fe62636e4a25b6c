//! Diagnostics attached to unpowered components.

use serde::{Deserialize, Serialize};

use crate::circuit::CurrentKind;

/// A structured explanation of why a component is not powered.
///
/// Diagnostics replace exceptions throughout the evaluator: every anomaly
/// (missing source, loose wiring, broken loop) becomes one of these, rendered
/// by the host UI as an on-hover tooltip. `issues` describe what is wrong,
/// `fixes` suggest what the user can do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What is wrong
    pub issues: Vec<String>,
    /// Suggested fixes, in order of usefulness
    pub fixes: Vec<String>,
}

impl Diagnostic {
    /// The circuit has no active power source for the selected supply kind.
    pub fn no_power_source(kind: CurrentKind) -> Self {
        let source_name = match kind {
            CurrentKind::Dc => "Battery",
            CurrentKind::Ac => "AC Source",
        };
        Self {
            issues: vec![format!("No {} power source in the circuit", kind)],
            fixes: vec![format!("Add a {} to the canvas", source_name)],
        }
    }

    /// The component has fewer than the two wires it needs.
    pub fn under_wired(wire_count: usize) -> Self {
        if wire_count == 0 {
            Self {
                issues: vec!["No wires connected".to_string()],
                fixes: vec!["Connect a wire to each of the two terminals".to_string()],
            }
        } else {
            Self {
                issues: vec!["Only 1 wire connected, need 2 wires".to_string()],
                fixes: vec!["Connect a second wire to the free terminal".to_string()],
            }
        }
    }

    /// The component is wired but no closed loop reaches a power source.
    pub fn open_loop() -> Self {
        Self {
            issues: vec!["Not in a complete circuit loop".to_string()],
            fixes: vec![
                "Make sure wires create a loop from the power source and back".to_string(),
                "Check that all connections are complete".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_power_source_names_the_mode() {
        let diag = Diagnostic::no_power_source(CurrentKind::Dc);
        assert_eq!(diag.issues, vec!["No DC power source in the circuit"]);
        assert_eq!(diag.fixes, vec!["Add a Battery to the canvas"]);

        let diag = Diagnostic::no_power_source(CurrentKind::Ac);
        assert_eq!(diag.issues, vec!["No AC power source in the circuit"]);
        assert_eq!(diag.fixes, vec!["Add a AC Source to the canvas"]);
    }

    #[test]
    fn test_under_wired_distinguishes_counts() {
        let none = Diagnostic::under_wired(0);
        let one = Diagnostic::under_wired(1);
        assert_ne!(none, one);
        assert_eq!(none.issues, vec!["No wires connected"]);
        assert_eq!(one.issues, vec!["Only 1 wire connected, need 2 wires"]);
    }
}
