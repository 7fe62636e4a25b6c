//! Circuit representation and adjacency construction.
//!
//! This module provides the aggregate the host UI edits and the evaluator
//! consumes: placed [`Component`](crate::components::Component)s, [`Wire`]s
//! between component terminals, and the selected supply mode, plus the
//! [`Adjacency`] map rebuilt from them on every evaluation pass.

mod graph;
mod types;
mod validate;

pub use graph::{Adjacency, Circuit, Wire};
pub use types::*;
pub use validate::validate_circuit;
