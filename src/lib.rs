//! # CircuitLab Core
//!
//! The connectivity and power-flow evaluator behind an educational
//! circuit-builder.
//!
//! Users place two-terminal components (battery, AC source, bulb, fan,
//! kettle, TV, switch, resistor, fuse) on a canvas and draw wires between
//! component terminals. This library decides which components light up: a
//! component is powered exactly when it sits on a closed loop with a power
//! source matching the selected supply mode (AC or DC), with open switches
//! breaking continuity. Everything that keeps a component dark is reported
//! as a structured diagnostic (issues plus suggested fixes) instead of an
//! error.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Component catalog, placed components, diagnostics
//! - [`circuit`] - Circuit aggregate, adjacency construction, validation
//! - [`solver`] - Reachability, loop checking, the power propagation pass,
//!   and the ticking simulation driver
//! - [`snapshot`] - Whole-circuit JSON export/import
//! - [`dsl`] - Parser for the text description format
//!
//! ## Usage
//!
//! ```
//! use circuitlab_core::circuit::Circuit;
//! use circuitlab_core::{dsl, solver};
//!
//! let ast = dsl::parse(
//!     "battery BAT1\n\
//!      bulb BULB1\n\
//!      wire W1 BAT1:1 BULB1:0\n\
//!      wire W2 BULB1:1 BAT1:0",
//! )
//! .unwrap();
//! let mut circuit = Circuit::from_ast(ast).unwrap();
//! solver::evaluate(&mut circuit);
//! ```
//!
//! ## Evaluation model
//!
//! Each pass is a pure function of the circuit snapshot:
//!
//! 1. Collect the power sources matching the selected supply mode
//! 2. Rebuild the adjacency map, excluding wires blocked by open switches
//! 3. Per component, search for a return path to a source spanning more
//!    than two distinct nodes (a genuine loop, not the trivial backtrack)
//!
//! The host re-runs the pass on a fixed timer while simulation is on and
//! immediately after every edit; [`solver::Simulator`] packages that
//! lifecycle.

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod snapshot;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Adjacency, Circuit, CurrentKind, Wire};
pub use components::{Component, ComponentKind, Diagnostic};
pub use error::{CircuitLabError, Result};
pub use solver::{evaluate, Simulator};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitLab;

/// Default interval between timer-driven re-evaluations, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
