//! Connectivity and power-flow evaluation.
//!
//! This module provides the engine that decides which components light up.
//!
//! ## Evaluation strategy
//!
//! On every pass the engine:
//! 1. Finds the power sources matching the selected supply mode
//! 2. Rebuilds the adjacency map from the wire list, dropping every wire
//!    that touches an open switch
//! 3. For each remaining component, asks whether a closed loop through an
//!    active source exists
//!
//! A component counts as powered only when it sits on a genuine loop: a
//! path back to the source spanning more than two distinct components, so
//! that retracing the single wire pair you arrived on does not count. Plain
//! reachability would light up dead-end branches.
//!
//! Nothing here returns errors; incomplete circuits degrade to unpowered
//! components carrying a [`Diagnostic`](crate::components::Diagnostic).

mod evaluate;
mod simulator;
mod traversal;

pub use evaluate::evaluate;
pub use simulator::{Simulator, SimulatorConfig};
pub use traversal::{closes_loop, is_reachable};

/// Minimum number of distinct components a return path must span to count
/// as a closed loop. Two would be the trivial out-and-back over one wire
/// pair.
pub const MIN_LOOP_NODES: usize = 3;

/// Number of wires a component needs before traversal is attempted.
pub const REQUIRED_WIRES: usize = 2;
