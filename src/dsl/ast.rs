//! Declarations parsed from a circuit description file.

use crate::circuit::{ComponentId, CurrentKind, PinIndex, Position, Terminal};
use crate::components::ComponentKind;

/// Everything a description file declares, before resolution.
#[derive(Debug, Clone, Default)]
pub struct CircuitAst {
    /// Supply mode from a `.mode` directive, if any
    pub mode: Option<CurrentKind>,
    /// Component declarations, in file order
    pub components: Vec<ComponentDecl>,
    /// Wire declarations, in file order
    pub wires: Vec<WireDecl>,
}

impl CircuitAst {
    /// Create an empty AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One component line: `<kind> <name> [on|off] [x=<num> y=<num>]`.
#[derive(Debug, Clone)]
pub struct ComponentDecl {
    /// Catalog kind
    pub kind: ComponentKind,
    /// Declared name, used as the component id
    pub name: String,
    /// Switch state; always true for non-switches
    pub closed: bool,
    /// Canvas position, when declared
    pub position: Option<Position>,
    /// Source line number for error reporting
    pub line: usize,
}

/// A `<component>:<pin>` reference inside a wire line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalDecl {
    /// Referenced component name
    pub component: String,
    /// Pin index as written (validated during resolution)
    pub pin: u8,
}

impl TerminalDecl {
    /// Convert into a resolved terminal.
    pub fn to_terminal(&self) -> Terminal {
        Terminal {
            component: ComponentId::new(self.component.as_str()),
            pin: PinIndex(self.pin),
        }
    }
}

/// One wire line: `wire <name> <component>:<pin> <component>:<pin>`.
#[derive(Debug, Clone)]
pub struct WireDecl {
    /// Declared name, used as the wire id
    pub name: String,
    /// First endpoint
    pub from: TerminalDecl,
    /// Second endpoint
    pub to: TerminalDecl,
    /// Source line number for error reporting
    pub line: usize,
}
