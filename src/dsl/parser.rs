//! Parser for circuit description files.

use super::ast::{CircuitAst, ComponentDecl, TerminalDecl, WireDecl};
use super::lexer::{parse_number, Lexer, Token, TokenKind};
use crate::circuit::{CurrentKind, Position};
use crate::components::ComponentKind;
use crate::error::{CircuitLabError, Result};

/// Parser for circuit descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token().unwrap_or(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            line: 1,
            column: 1,
        });
        Self { lexer, current }
    }

    /// Parse the entire description.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                // Skip empty lines
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => {
                    self.parse_directive(&mut ast)?;
                }
                TokenKind::Identifier => {
                    if self.current.text.eq_ignore_ascii_case("wire") {
                        let wire = self.parse_wire()?;
                        ast.wires.push(wire);
                    } else {
                        let component = self.parse_component()?;
                        ast.components.push(component);
                    }
                }
                _ => {
                    return Err(CircuitLabError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            // Consume newline or EOF
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CircuitLabError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn at_end_of_line(&self) -> bool {
        self.current.kind == TokenKind::Newline || self.current.kind == TokenKind::Eof
    }

    fn parse_directive(&mut self, ast: &mut CircuitAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".mode" => {
                let token = self.expect(TokenKind::Identifier)?;
                let mode = CurrentKind::from_str(&token.text).ok_or_else(|| {
                    CircuitLabError::parse(line, format!("unknown supply mode: {}", token.text))
                })?;
                ast.mode = Some(mode);
            }
            _ => {
                return Err(CircuitLabError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_component(&mut self) -> Result<ComponentDecl> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        let kind = ComponentKind::from_keyword(&keyword).ok_or_else(|| {
            CircuitLabError::UnknownComponentKind {
                kind: keyword.clone(),
                line,
            }
        })?;
        self.advance()?;

        let name = self.expect(TokenKind::Identifier)?.text;
        let mut closed = true;
        let mut x = None;
        let mut y = None;

        while !self.at_end_of_line() {
            let token = self.expect(TokenKind::Identifier)?;
            match token.text.to_ascii_lowercase().as_str() {
                state @ ("on" | "off") => {
                    if kind != ComponentKind::Switch {
                        return Err(CircuitLabError::invalid_component(
                            &name,
                            line,
                            format!("only switches take '{}'", state),
                        ));
                    }
                    closed = state == "on";
                }
                axis @ ("x" | "y") => {
                    self.expect(TokenKind::Equals)?;
                    let value_text = self.expect(TokenKind::Number)?.text;
                    let value = parse_number(&value_text).ok_or_else(|| {
                        CircuitLabError::invalid_component(
                            &name,
                            line,
                            format!("invalid coordinate: {}", value_text),
                        )
                    })?;
                    if axis == "x" {
                        x = Some(value);
                    } else {
                        y = Some(value);
                    }
                }
                other => {
                    return Err(CircuitLabError::invalid_component(
                        &name,
                        line,
                        format!("unexpected '{}'", other),
                    ));
                }
            }
        }

        let position = match (x, y) {
            (None, None) => None,
            _ => Some(Position::new(x.unwrap_or(0.0), y.unwrap_or(0.0))),
        };

        Ok(ComponentDecl {
            kind,
            name,
            closed,
            position,
            line,
        })
    }

    fn parse_wire(&mut self) -> Result<WireDecl> {
        let line = self.current.line;
        self.advance()?; // consume 'wire'

        let name = self.expect(TokenKind::Identifier)?.text;
        let from = self.parse_terminal(&name)?;
        let to = self.parse_terminal(&name)?;

        if !self.at_end_of_line() {
            return Err(CircuitLabError::invalid_wire(
                &name,
                line,
                format!("unexpected '{}'", self.current.text),
            ));
        }

        Ok(WireDecl {
            name,
            from,
            to,
            line,
        })
    }

    fn parse_terminal(&mut self, wire: &str) -> Result<TerminalDecl> {
        let component = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Colon)?;
        let pin_token = self.expect(TokenKind::Number)?;
        let pin = pin_token.text.parse::<u8>().map_err(|_| {
            CircuitLabError::invalid_wire(
                wire,
                pin_token.line,
                format!("invalid pin index: {}", pin_token.text),
            )
        })?;

        Ok(TerminalDecl {
            component: component.text,
            pin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Circuit;

    #[test]
    fn test_parse_component_line() {
        let ast = super::super::parse("battery BAT1 x=40 y=80").unwrap();
        assert_eq!(ast.components.len(), 1);
        let decl = &ast.components[0];
        assert_eq!(decl.kind, ComponentKind::Battery);
        assert_eq!(decl.name, "BAT1");
        assert!(decl.closed);
        assert_eq!(decl.position, Some(Position::new(40.0, 80.0)));
    }

    #[test]
    fn test_parse_switch_state() {
        let ast = super::super::parse("switch SW1 off").unwrap();
        assert!(!ast.components[0].closed);

        let err = super::super::parse("bulb B1 off").unwrap_err();
        assert!(matches!(err, CircuitLabError::InvalidComponent { .. }));
    }

    #[test]
    fn test_parse_mode_directive() {
        let ast = super::super::parse(".mode AC\nacsource AC1").unwrap();
        assert_eq!(ast.mode, Some(CurrentKind::Ac));

        let err = super::super::parse(".mode XY").unwrap_err();
        assert!(matches!(err, CircuitLabError::ParseError { .. }));
    }

    #[test]
    fn test_parse_wire_line() {
        let ast = super::super::parse("wire W1 BAT1:1 SW1:0").unwrap();
        assert_eq!(ast.wires.len(), 1);
        let decl = &ast.wires[0];
        assert_eq!(decl.name, "W1");
        assert_eq!(decl.from.component, "BAT1");
        assert_eq!(decl.from.pin, 1);
        assert_eq!(decl.to.component, "SW1");
        assert_eq!(decl.to.pin, 0);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = super::super::parse("transistor T1").unwrap_err();
        assert!(matches!(
            err,
            CircuitLabError::UnknownComponentKind { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_with_comments_and_blanks() {
        let input = "# series loop\n\nbattery BAT1 ; the source\nbulb B1\nwire W1 BAT1:1 B1:0\n";
        let ast = super::super::parse(input).unwrap();
        assert_eq!(ast.components.len(), 2);
        assert_eq!(ast.wires.len(), 1);
    }

    #[test]
    fn test_full_description_builds_a_circuit() {
        let input = "\
.mode DC
battery BAT1 x=40 y=40
switch  SW1 on
bulb    BULB1

wire W1 BAT1:1 SW1:0
wire W2 SW1:1 BULB1:0
wire W3 BULB1:1 BAT1:0
";
        let ast = super::super::parse(input).unwrap();
        let circuit = Circuit::from_ast(ast).unwrap();
        assert_eq!(circuit.components.len(), 3);
        assert_eq!(circuit.wires.len(), 3);
        assert_eq!(circuit.current_kind, CurrentKind::Dc);
    }

    #[test]
    fn test_duplicate_names_rejected_at_resolution() {
        let ast = super::super::parse("bulb B1\nbulb B1").unwrap();
        let err = Circuit::from_ast(ast).unwrap_err();
        assert!(matches!(err, CircuitLabError::DuplicateComponent { .. }));
    }

    #[test]
    fn test_wire_to_unknown_component_rejected_at_resolution() {
        let ast = super::super::parse("bulb B1\nwire W1 B1:0 GHOST:1").unwrap();
        let err = Circuit::from_ast(ast).unwrap_err();
        assert!(matches!(err, CircuitLabError::UnknownComponent { .. }));
    }

    #[test]
    fn test_out_of_range_pin_rejected_at_resolution() {
        let ast = super::super::parse("bulb B1\nfan F1\nwire W1 B1:0 F1:3").unwrap();
        let err = Circuit::from_ast(ast).unwrap_err();
        assert!(matches!(err, CircuitLabError::InvalidPin { pin: 3, .. }));
    }
}
