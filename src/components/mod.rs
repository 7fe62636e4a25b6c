//! Placed components and their evaluation state.
//!
//! A [`Component`] is one element the user dropped onto the canvas: a power
//! source, a load (bulb, fan, kettle, TV, resistor, fuse), or a switch.
//! Every component has exactly two terminals. The evaluator writes the
//! `powered` flag and the optional [`Diagnostic`] back onto the component on
//! every pass; both are outputs, fully recomputed each time.

mod diagnostic;
mod kind;

pub use diagnostic::Diagnostic;
pub use kind::ComponentKind;

use serde::{Deserialize, Serialize};

use crate::circuit::{ComponentId, CurrentKind, Position};

fn default_closed() -> bool {
    true
}

/// A placed circuit element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique id minted by the host UI
    pub id: ComponentId,
    /// Catalog kind
    pub kind: ComponentKind,
    /// Canvas position, rendering only
    #[serde(default)]
    pub position: Position,
    /// Switch state; meaningful for switches, `true` for everything else
    #[serde(default = "default_closed")]
    pub closed: bool,
    /// Evaluation output: is the component on a powered loop?
    #[serde(default)]
    pub powered: bool,
    /// Evaluation output: why the component is unpowered, if it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl Component {
    /// Create a component at the canvas origin.
    pub fn new(id: impl Into<ComponentId>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            closed: true,
            powered: false,
            diagnostic: None,
        }
    }

    /// Move the component to a canvas position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Create a switch in the given state.
    pub fn switch(id: impl Into<ComponentId>, closed: bool) -> Self {
        Self {
            closed,
            ..Self::new(id, ComponentKind::Switch)
        }
    }

    /// Whether this component is a power source of any kind.
    pub fn is_source(&self) -> bool {
        self.kind.is_source()
    }

    /// The supply kind this component provides, if it is a source.
    pub fn source_kind(&self) -> Option<CurrentKind> {
        self.kind.source_kind()
    }

    /// Whether this component is a switch currently breaking the circuit.
    pub fn is_open_switch(&self) -> bool {
        self.kind == ComponentKind::Switch && !self.closed
    }

    /// Set the switch state. No-op for non-switches.
    pub fn set_closed(&mut self, closed: bool) {
        if self.kind == ComponentKind::Switch {
            self.closed = closed;
        }
    }

    /// Toggle the switch state. No-op for non-switches.
    pub fn toggle(&mut self) {
        if self.kind == ComponentKind::Switch {
            self.closed = !self.closed;
        }
    }

    /// Reset the evaluation outputs, as when simulation stops.
    pub fn reset_power_state(&mut self) {
        self.powered = false;
        self.diagnostic = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_state() {
        let mut sw = Component::switch("SW1", true);
        assert!(!sw.is_open_switch());
        sw.toggle();
        assert!(sw.is_open_switch());
        sw.set_closed(true);
        assert!(sw.closed);
    }

    #[test]
    fn test_toggle_ignores_non_switches() {
        let mut bulb = Component::new("B1", ComponentKind::Bulb);
        bulb.toggle();
        assert!(bulb.closed);
        bulb.set_closed(false);
        assert!(bulb.closed);
    }

    #[test]
    fn test_reset_power_state() {
        let mut fan = Component::new("F1", ComponentKind::Fan);
        fan.powered = true;
        fan.diagnostic = Some(Diagnostic::open_loop());
        fan.reset_power_state();
        assert!(!fan.powered);
        assert!(fan.diagnostic.is_none());
    }
}
