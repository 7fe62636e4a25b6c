//! Circuit aggregate and adjacency construction.

use std::collections::{HashMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use super::types::{ComponentId, CurrentKind, Position, Terminal, WireId};
use crate::components::{Component, ComponentKind};
use crate::dsl::CircuitAst;
use crate::error::{CircuitLabError, Result};

/// A wire connecting two component terminals.
///
/// Waypoints are rendering bends; connectivity only reads the endpoints.
/// By convention the two endpoints reference distinct components; the
/// builders in this crate enforce that, the evaluator merely tolerates
/// violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    /// Unique id minted by the host UI
    pub id: WireId,
    /// First endpoint
    pub from: Terminal,
    /// Second endpoint
    pub to: Terminal,
    /// Rendering bends, in drawing order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Position>,
}

impl Wire {
    /// Create a wire between two terminals.
    pub fn new(id: impl Into<WireId>, from: Terminal, to: Terminal) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            waypoints: Vec::new(),
        }
    }

    /// Whether either endpoint lands on the given component.
    pub fn touches(&self, component: &ComponentId) -> bool {
        self.from.component == *component || self.to.component == *component
    }
}

/// The full editable circuit: placed components, wires, and the selected
/// supply mode.
///
/// This is the snapshot the evaluator consumes; it is also the aggregate the
/// snapshot format serializes wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// All placed components
    pub components: Vec<Component>,
    /// All drawn wires
    pub wires: Vec<Wire>,
    /// The globally selected supply mode
    pub current_kind: CurrentKind,
}

impl Circuit {
    /// Create an empty circuit in the given supply mode.
    pub fn new(current_kind: CurrentKind) -> Self {
        Self {
            components: Vec::new(),
            wires: Vec::new(),
            current_kind,
        }
    }

    /// Build a circuit from a parsed description.
    pub fn from_ast(ast: CircuitAst) -> Result<Self> {
        let mut circuit = Circuit::new(ast.mode.unwrap_or_default());

        let mut seen = HashSet::new();
        for decl in &ast.components {
            if !seen.insert(decl.name.clone()) {
                return Err(CircuitLabError::DuplicateComponent {
                    id: decl.name.clone(),
                });
            }
            let mut component = Component::new(decl.name.as_str(), decl.kind);
            component.closed = decl.closed;
            if let Some(position) = decl.position {
                component.position = position;
            }
            circuit.components.push(component);
        }

        let mut seen_wires = HashSet::new();
        for decl in &ast.wires {
            if !seen_wires.insert(decl.name.clone()) {
                return Err(CircuitLabError::DuplicateWire {
                    id: decl.name.clone(),
                });
            }
            for endpoint in [&decl.from, &decl.to] {
                if !seen.contains(&endpoint.component) {
                    return Err(CircuitLabError::UnknownComponent {
                        wire: decl.name.clone(),
                        component: endpoint.component.clone(),
                    });
                }
                if endpoint.pin >= 2 {
                    return Err(CircuitLabError::InvalidPin {
                        wire: decl.name.clone(),
                        component: endpoint.component.clone(),
                        pin: endpoint.pin,
                    });
                }
            }
            if decl.from.component == decl.to.component {
                return Err(CircuitLabError::SelfLoopWire {
                    wire: decl.name.clone(),
                    component: decl.from.component.clone(),
                });
            }
            circuit.wires.push(Wire::new(
                decl.name.as_str(),
                decl.from.to_terminal(),
                decl.to.to_terminal(),
            ));
        }

        Ok(circuit)
    }

    /// Add a component.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Add a wire.
    pub fn add_wire(&mut self, wire: Wire) {
        self.wires.push(wire);
    }

    /// Remove a component by id.
    ///
    /// Wires attached to it are left in place, exactly as the host UI does;
    /// the adjacency builder skips wires with dangling endpoints.
    pub fn remove_component(&mut self, id: &ComponentId) {
        self.components.retain(|c| c.id != *id);
    }

    /// Remove a wire by id.
    pub fn remove_wire(&mut self, id: &WireId) {
        self.wires.retain(|w| w.id != *id);
    }

    /// Look up a component by id.
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == *id)
    }

    /// Look up a component by id, mutably.
    pub fn component_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == *id)
    }

    /// Set a switch's state. Returns false if no such component exists.
    pub fn set_switch(&mut self, id: &ComponentId, closed: bool) -> bool {
        match self.component_mut(id) {
            Some(component) if component.kind == ComponentKind::Switch => {
                component.set_closed(closed);
                true
            }
            _ => false,
        }
    }

    /// Number of wires touching the given component.
    pub fn incident_wires(&self, id: &ComponentId) -> usize {
        self.wires.iter().filter(|w| w.touches(id)).count()
    }

    /// Power sources matching the selected supply mode.
    pub fn active_sources(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.source_kind() == Some(self.current_kind))
            .collect()
    }

    /// A key that changes whenever anything the evaluator reads changes:
    /// the supply mode, every component's id and switch state, and the wire
    /// list. Evaluation outputs (`powered`, `diagnostic`) are excluded so
    /// that a pass does not invalidate its own key.
    pub fn revision_key(&self) -> String {
        let mut key = self.current_kind.to_string();
        for component in &self.components {
            key.push_str(&format!(
                "|{}:{}:{}",
                component.id,
                component.kind.display_name(),
                component.closed as u8
            ));
        }
        for wire in &self.wires {
            key.push_str(&format!("|{}:{}>{}", wire.id, wire.from, wire.to));
        }
        key
    }
}

/// Undirected adjacency over component ids, rebuilt once per evaluation
/// pass from the wire list.
///
/// A wire is excluded entirely when either endpoint is a switch in the open
/// state, when an endpoint references a missing component, or when both
/// endpoints land on the same component.
#[derive(Debug, Default)]
pub struct Adjacency {
    edges: HashMap<ComponentId, Vec<ComponentId>>,
}

impl Adjacency {
    /// Build the adjacency map for the circuit's current state.
    pub fn build(circuit: &Circuit) -> Self {
        let known: HashSet<&ComponentId> = circuit.components.iter().map(|c| &c.id).collect();
        let open_switches: HashSet<&ComponentId> = circuit
            .components
            .iter()
            .filter(|c| c.is_open_switch())
            .map(|c| &c.id)
            .collect();

        let mut adjacency = Self::default();
        for wire in &circuit.wires {
            let a = &wire.from.component;
            let b = &wire.to.component;

            if !known.contains(a) || !known.contains(b) {
                debug!("wire {} has a dangling endpoint, skipping", wire.id);
                continue;
            }
            if a == b {
                debug!("wire {} is a self-loop on {}, skipping", wire.id, a);
                continue;
            }
            if open_switches.contains(a) || open_switches.contains(b) {
                debug!("wire {} blocked by an open switch", wire.id);
                continue;
            }

            adjacency.connect(a.clone(), b.clone());
        }
        adjacency
    }

    fn connect(&mut self, a: ComponentId, b: ComponentId) {
        let forward = self.edges.entry(a.clone()).or_default();
        if !forward.contains(&b) {
            forward.push(b.clone());
        }
        let backward = self.edges.entry(b).or_default();
        if !backward.contains(&a) {
            backward.push(a);
        }
    }

    /// Components directly reachable from the given one over one wire.
    pub fn neighbors(&self, id: &ComponentId) -> &[ComponentId] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the component has at least one usable wire.
    pub fn contains(&self, id: &ComponentId) -> bool {
        self.edges.contains_key(id)
    }

    /// Number of components with at least one usable wire.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no usable wires exist at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::PinIndex;

    fn wire(id: &str, from: &str, to: &str) -> Wire {
        Wire::new(
            id,
            Terminal::new(from, PinIndex::A),
            Terminal::new(to, PinIndex::B),
        )
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("BAT1", ComponentKind::Battery));
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "BAT1", "B1"));

        let adjacency = Adjacency::build(&circuit);
        assert_eq!(adjacency.neighbors(&"BAT1".into()), &["B1".into()]);
        assert_eq!(adjacency.neighbors(&"B1".into()), &["BAT1".into()]);
    }

    #[test]
    fn test_parallel_wires_store_one_edge() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("BAT1", ComponentKind::Battery));
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "BAT1", "B1"));
        circuit.add_wire(wire("W2", "B1", "BAT1"));

        let adjacency = Adjacency::build(&circuit);
        assert_eq!(adjacency.neighbors(&"BAT1".into()).len(), 1);
    }

    #[test]
    fn test_open_switch_excludes_its_wires() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("BAT1", ComponentKind::Battery));
        circuit.add_component(Component::switch("SW1", false));
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "BAT1", "SW1"));
        circuit.add_wire(wire("W2", "SW1", "B1"));
        circuit.add_wire(wire("W3", "B1", "BAT1"));

        let adjacency = Adjacency::build(&circuit);
        assert!(!adjacency.contains(&"SW1".into()));
        assert_eq!(adjacency.neighbors(&"B1".into()), &["BAT1".into()]);

        // Closing the switch restores both wires.
        circuit.set_switch(&"SW1".into(), true);
        let adjacency = Adjacency::build(&circuit);
        assert_eq!(adjacency.neighbors(&"SW1".into()).len(), 2);
    }

    #[test]
    fn test_dangling_wire_is_skipped() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "B1", "GONE"));

        let adjacency = Adjacency::build(&circuit);
        assert!(adjacency.is_empty());
    }

    #[test]
    fn test_self_loop_wire_is_skipped() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "B1", "B1"));

        let adjacency = Adjacency::build(&circuit);
        assert!(adjacency.is_empty());
    }

    #[test]
    fn test_remove_component_leaves_wires_dangling() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::new("BAT1", ComponentKind::Battery));
        circuit.add_component(Component::new("B1", ComponentKind::Bulb));
        circuit.add_wire(wire("W1", "BAT1", "B1"));

        circuit.remove_component(&"B1".into());
        assert_eq!(circuit.wires.len(), 1);
        assert!(Adjacency::build(&circuit).is_empty());
    }

    #[test]
    fn test_revision_key_tracks_state() {
        let mut circuit = Circuit::new(CurrentKind::Dc);
        circuit.add_component(Component::switch("SW1", true));
        let before = circuit.revision_key();

        circuit.set_switch(&"SW1".into(), false);
        assert_ne!(before, circuit.revision_key());

        circuit.current_kind = CurrentKind::Ac;
        let with_mode = circuit.revision_key();
        assert!(with_mode.starts_with("AC"));

        // Evaluation outputs do not perturb the key.
        circuit.components[0].powered = true;
        assert_eq!(with_mode, circuit.revision_key());
    }
}
