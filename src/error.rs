//! Error types for the CircuitLab evaluator.
//!
//! This module provides a unified error type [`CircuitLabError`] that covers
//! all error conditions that can occur while parsing circuit descriptions,
//! building circuits, and reading or writing snapshots.
//!
//! Note that the evaluator itself never produces errors: a malformed or
//! incomplete circuit degrades to unpowered components carrying a
//! [`Diagnostic`](crate::components::Diagnostic).

use thiserror::Error;

/// Result type alias using [`CircuitLabError`].
pub type Result<T> = std::result::Result<T, CircuitLabError>;

/// Unified error type for all CircuitLab operations.
#[derive(Error, Debug)]
pub enum CircuitLabError {
    // ============ Description Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown component kind keyword
    #[error("Unknown component kind '{kind}' at line {line}")]
    UnknownComponentKind { kind: String, line: usize },

    /// Invalid component declaration
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Invalid wire declaration
    #[error("Invalid wire '{name}' at line {line}: {message}")]
    InvalidWire {
        name: String,
        line: usize,
        message: String,
    },

    // ============ Circuit Construction Errors ============
    /// Duplicate component id
    #[error("Duplicate component id '{id}'")]
    DuplicateComponent { id: String },

    /// Duplicate wire id
    #[error("Duplicate wire id '{id}'")]
    DuplicateWire { id: String },

    /// Wire endpoint references a component that does not exist
    #[error("Wire '{wire}' references unknown component '{component}'")]
    UnknownComponent { wire: String, component: String },

    /// Pin index outside the two terminals every component has
    #[error("Wire '{wire}' references pin {pin} of '{component}' (components have pins 0 and 1)")]
    InvalidPin {
        wire: String,
        component: String,
        pin: u8,
    },

    /// Both endpoints of a wire land on the same component
    #[error("Wire '{wire}' connects component '{component}' to itself")]
    SelfLoopWire { wire: String, component: String },

    // ============ Snapshot Errors ============
    /// Snapshot could not be serialized
    #[error("Failed to encode snapshot: {source}")]
    SnapshotEncode {
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be parsed
    #[error("Malformed snapshot: {source}")]
    SnapshotDecode {
        #[source]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error reading a circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a snapshot file
    #[error("Failed to write snapshot file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CircuitLabError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(
        name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid wire error
    pub fn invalid_wire(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidWire {
            name: name.into(),
            line,
            message: message.into(),
        }
    }
}
