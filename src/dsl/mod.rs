//! Text format for describing circuits outside the canvas UI.
//!
//! The format is line-oriented and human-editable: one declaration per
//! line, comments with `#` or `;`.
//!
//! # Grammar Overview
//!
//! ```text
//! description = { line }
//! line        = comment | directive | component | wire | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".mode" ("AC" | "DC")
//! component   = kind name [state] [position]
//! wire        = "wire" name terminal terminal
//!
//! kind        = "battery" | "acsource" | "bulb" | "fan" | "kettle"
//!             | "tv" | "switch" | "resistor" | "fuse"
//! state       = "on" | "off"                 (switches only)
//! position    = "x" "=" number "y" "=" number
//! terminal    = name ":" pin
//! pin         = "0" | "1"
//!
//! number      = ['-'] digit+ ['.' digit+]
//! name        = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! # Example
//!
//! ```text
//! # Battery, switch and bulb in one series loop
//! .mode DC
//!
//! battery BAT1 x=40 y=40
//! switch  SW1 on
//! bulb    BULB1 x=160 y=40
//!
//! wire W1 BAT1:1 SW1:0
//! wire W2 SW1:1 BULB1:0
//! wire W3 BULB1:1 BAT1:0
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a circuit description string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a circuit description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::error::CircuitLabError::FileReadError {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    parse(&content)
}
