//! Circuit validation.

use std::collections::HashSet;

use log::warn;

use crate::error::{CircuitLabError, Result};

use super::Circuit;

/// Validate a circuit's structure.
///
/// Checks:
/// - No duplicate component or wire ids
/// - Pin indexes stay within the two terminals every component has
/// - No wire connects a component to itself
///
/// Dangling wire endpoints (a wire naming a component that no longer
/// exists) are only warned about: the host UI produces them when a
/// component is deleted, and the evaluator skips such wires.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    let mut component_ids = HashSet::new();
    for component in &circuit.components {
        if !component_ids.insert(&component.id) {
            return Err(CircuitLabError::DuplicateComponent {
                id: component.id.to_string(),
            });
        }
    }

    let mut wire_ids = HashSet::new();
    for wire in &circuit.wires {
        if !wire_ids.insert(&wire.id) {
            return Err(CircuitLabError::DuplicateWire {
                id: wire.id.to_string(),
            });
        }

        for endpoint in [&wire.from, &wire.to] {
            if !endpoint.pin.is_valid() {
                return Err(CircuitLabError::InvalidPin {
                    wire: wire.id.to_string(),
                    component: endpoint.component.to_string(),
                    pin: endpoint.pin.0,
                });
            }
            if !component_ids.contains(&endpoint.component) {
                warn!(
                    "wire {} references missing component {}",
                    wire.id, endpoint.component
                );
            }
        }

        if wire.from.component == wire.to.component {
            return Err(CircuitLabError::SelfLoopWire {
                wire: wire.id.to_string(),
                component: wire.from.component.to_string(),
            });
        }
    }

    Ok(())
}
