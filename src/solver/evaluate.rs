//! The power propagation pass.

use std::collections::HashMap;

use log::debug;

use crate::circuit::{Adjacency, Circuit, ComponentId};
use crate::components::Diagnostic;

use super::{closes_loop, REQUIRED_WIRES};

/// Run one evaluation pass over the circuit.
///
/// Recomputes every component's `powered` flag and `diagnostic` from
/// scratch:
///
/// 1. Power sources matching the selected supply mode become the active
///    sources. With none present, every non-source component gets the
///    "no power source" diagnostic and the pass ends without traversal.
/// 2. Active sources are powered; sources of the other supply kind sit
///    dark with no diagnostic.
/// 3. Every other component with fewer than two incident wires is
///    diagnosed as under-wired, again without traversal.
/// 4. The rest are powered exactly when a closed loop through some active
///    source exists, and diagnosed as loop-broken otherwise.
///
/// The pass reads switch states while building the adjacency map, mutates
/// only the components array, and never fails: every anomaly a circuit can
/// contain degrades to an unpowered component with guidance attached.
/// Running it twice on an unchanged circuit yields identical results.
pub fn evaluate(circuit: &mut Circuit) {
    let mode = circuit.current_kind;
    let sources: Vec<ComponentId> = circuit
        .active_sources()
        .into_iter()
        .map(|c| c.id.clone())
        .collect();

    if sources.is_empty() {
        debug!("no active {} source, skipping traversal", mode);
        for component in &mut circuit.components {
            component.powered = false;
            component.diagnostic = if component.is_source() {
                None
            } else {
                Some(Diagnostic::no_power_source(mode))
            };
        }
        return;
    }

    let adjacency = Adjacency::build(circuit);

    let mut wire_counts: HashMap<ComponentId, usize> = HashMap::new();
    for wire in &circuit.wires {
        for endpoint in [&wire.from, &wire.to] {
            *wire_counts.entry(endpoint.component.clone()).or_default() += 1;
        }
    }

    let mut powered_count = 0;
    for component in &mut circuit.components {
        if component.source_kind() == Some(mode) {
            component.powered = true;
            component.diagnostic = None;
            powered_count += 1;
            continue;
        }
        if component.is_source() {
            // Wrong-mode source: inert, but not a user error.
            component.reset_power_state();
            continue;
        }

        let wires = wire_counts.get(&component.id).copied().unwrap_or(0);
        if wires < REQUIRED_WIRES {
            component.powered = false;
            component.diagnostic = Some(Diagnostic::under_wired(wires));
            continue;
        }

        let in_loop = sources
            .iter()
            .any(|source| closes_loop(&adjacency, &component.id, source));
        if in_loop {
            component.powered = true;
            component.diagnostic = None;
            powered_count += 1;
        } else {
            component.powered = false;
            component.diagnostic = Some(Diagnostic::open_loop());
        }
    }

    debug!(
        "evaluated {} components, {} powered",
        circuit.components.len(),
        powered_count
    );
}
