//! Core types for circuit representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a placed component.
///
/// Ids are opaque strings minted by the host UI when a component is dropped
/// onto the canvas; they stay stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A unique identifier for a wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireId(pub String);

impl WireId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WireId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WireId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Index of one of a component's two terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinIndex(pub u8);

impl PinIndex {
    /// The first terminal.
    pub const A: PinIndex = PinIndex(0);
    /// The second terminal.
    pub const B: PinIndex = PinIndex(1);

    /// Every component has exactly pins 0 and 1.
    pub fn is_valid(&self) -> bool {
        self.0 < 2
    }
}

impl fmt::Display for PinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A terminal reference: one pin of one component.
///
/// Wires attach to terminals, not to components, so that the host UI can
/// render which side of a component each wire lands on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Terminal {
    /// The component this terminal belongs to
    pub component: ComponentId,
    /// Which of the component's two pins
    pub pin: PinIndex,
}

impl Terminal {
    /// Create a terminal reference.
    pub fn new(component: impl Into<ComponentId>, pin: PinIndex) -> Self {
        Self {
            component: component.into(),
            pin,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.pin)
    }
}

impl From<ComponentId> for Terminal {
    fn from(component: ComponentId) -> Self {
        Self {
            component,
            pin: PinIndex::A,
        }
    }
}

/// The globally selected supply mode.
///
/// Only power sources matching the selected kind energize the circuit;
/// sources of the other kind sit dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentKind {
    /// Alternating current (AC Source components)
    Ac,
    /// Direct current (Battery components)
    Dc,
}

impl CurrentKind {
    /// Parse a supply kind from user input.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AC" => Some(Self::Ac),
            "DC" => Some(Self::Dc),
            _ => None,
        }
    }
}

impl fmt::Display for CurrentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ac => write!(f, "AC"),
            Self::Dc => write!(f, "DC"),
        }
    }
}

impl Default for CurrentKind {
    fn default() -> Self {
        Self::Dc
    }
}

/// A 2D canvas position.
///
/// Purely for rendering; connectivity never looks at coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
