//! Simulation driver.
//!
//! The evaluator itself is a pure pass over a circuit snapshot; this module
//! owns the loop around it. The host runs a fixed-interval timer while
//! simulation is on and calls [`Simulator::tick`] on each firing, plus
//! [`Simulator::sync`] immediately after any edit, which re-evaluates only
//! when the circuit's revision key actually changed.

use std::time::Duration;

use log::debug;

use crate::circuit::Circuit;

use super::evaluate;

/// Configuration for the simulation driver.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Interval between timer-driven re-evaluations.
    pub tick_interval: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(crate::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick interval.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}

/// Owns a circuit and re-evaluates it while simulation is running.
pub struct Simulator {
    circuit: Circuit,
    config: SimulatorConfig,
    running: bool,
    /// Revision key of the last evaluated state, for edit-driven refresh
    last_key: Option<String>,
}

impl Simulator {
    /// Create a stopped simulator around the given circuit.
    pub fn new(circuit: Circuit) -> Self {
        Self::with_config(circuit, SimulatorConfig::default())
    }

    /// Create a stopped simulator with a custom configuration.
    pub fn with_config(circuit: Circuit, config: SimulatorConfig) -> Self {
        Self {
            circuit,
            config,
            running: false,
            last_key: None,
        }
    }

    /// Whether simulation is currently on.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The interval the host should fire [`tick`](Self::tick) at.
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    /// Turn simulation on and evaluate immediately.
    pub fn start(&mut self) {
        self.running = true;
        self.evaluate_now();
    }

    /// Turn simulation off and reset every component to unpowered with no
    /// diagnostic.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_key = None;
        for component in &mut self.circuit.components {
            component.reset_power_state();
        }
    }

    /// Timer-driven re-evaluation. Does nothing while stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.evaluate_now();
        }
    }

    /// Edit-driven refresh: re-evaluate only when the circuit's revision
    /// key has changed since the last pass. Does nothing while stopped.
    pub fn sync(&mut self) {
        if !self.running {
            return;
        }
        let key = self.circuit.revision_key();
        if self.last_key.as_deref() != Some(key.as_str()) {
            debug!("circuit changed, re-evaluating");
            self.evaluate_now();
        }
    }

    fn evaluate_now(&mut self) {
        evaluate(&mut self.circuit);
        self.last_key = Some(self.circuit.revision_key());
    }

    /// The circuit in its current evaluation state.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Mutable access for edits. Follow edits with [`sync`](Self::sync) so
    /// results refresh without waiting for the next tick.
    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    /// Consume the simulator and return the circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}
