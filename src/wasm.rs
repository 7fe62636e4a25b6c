//! WASM bindings for CircuitLab Core.
//!
//! This module provides JavaScript-friendly bindings so the browser host
//! can drive the evaluator directly from its canvas state.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitLab } from 'circuitlab_core';
//!
//! await init();
//!
//! const lab = WasmCircuitLab.from_description(`
//!   battery BAT1
//!   switch  SW1 on
//!   bulb    BULB1
//!   wire W1 BAT1:1 SW1:0
//!   wire W2 SW1:1 BULB1:0
//!   wire W3 BULB1:1 BAT1:0
//! `);
//!
//! lab.start();
//! setInterval(() => lab.tick(), lab.tick_interval_ms);
//!
//! lab.set_switch('SW1', false);
//! lab.sync();
//! console.log(lab.is_powered('BULB1')); // false
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, ComponentId, CurrentKind};
use crate::dsl;
use crate::snapshot;
use crate::solver::Simulator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible wrapper around the circuit simulator.
#[wasm_bindgen]
pub struct WasmCircuitLab {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuitLab {
    /// Create an evaluator from a circuit description string.
    #[wasm_bindgen]
    pub fn from_description(description: &str) -> Result<WasmCircuitLab, JsValue> {
        let ast = dsl::parse(description).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let circuit = Circuit::from_ast(ast).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::wrap(circuit))
    }

    /// Create an evaluator from snapshot JSON, as exported by the host UI.
    #[wasm_bindgen]
    pub fn from_snapshot(json: &str) -> Result<WasmCircuitLab, JsValue> {
        let circuit = snapshot::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::wrap(circuit))
    }

    fn wrap(circuit: Circuit) -> Self {
        Self {
            simulator: Simulator::new(circuit),
        }
    }

    /// Turn simulation on and evaluate immediately.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.simulator.start();
    }

    /// Turn simulation off and reset all power state.
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.simulator.stop();
    }

    /// Timer-driven re-evaluation; call on a fixed interval while running.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.simulator.tick();
    }

    /// Edit-driven refresh; call after mutating the circuit.
    #[wasm_bindgen]
    pub fn sync(&mut self) {
        self.simulator.sync();
    }

    /// Whether simulation is currently on.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.simulator.is_running()
    }

    /// The interval the host should fire `tick` at, in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.simulator.tick_interval().as_millis() as u32
    }

    /// Set a switch's state. Returns false if no such switch exists.
    #[wasm_bindgen]
    pub fn set_switch(&mut self, id: &str, closed: bool) -> bool {
        self.simulator
            .circuit_mut()
            .set_switch(&ComponentId::from(id), closed)
    }

    /// Select the supply mode ("AC" or "DC").
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let kind = CurrentKind::from_str(mode)
            .ok_or_else(|| JsValue::from_str(&format!("'{}' is not AC or DC", mode)))?;
        self.simulator.circuit_mut().current_kind = kind;
        Ok(())
    }

    /// Whether the named component is powered, or `undefined` if unknown.
    #[wasm_bindgen]
    pub fn is_powered(&self, id: &str) -> Option<bool> {
        self.simulator
            .circuit()
            .component(&ComponentId::from(id))
            .map(|c| c.powered)
    }

    /// The named component's diagnostic as JSON, or `undefined` when the
    /// component is powered or unknown.
    #[wasm_bindgen]
    pub fn diagnostic_json(&self, id: &str) -> Option<String> {
        self.simulator
            .circuit()
            .component(&ComponentId::from(id))
            .and_then(|c| c.diagnostic.as_ref())
            .and_then(|d| serde_json::to_string(d).ok())
    }

    /// Export the circuit in its current evaluation state as snapshot JSON.
    #[wasm_bindgen]
    pub fn export_snapshot(&self) -> Result<String, JsValue> {
        snapshot::to_json(self.simulator.circuit()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
