//! Recursive descent parser producing an unvalidated tree
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := unary (("*" | "/") unary)*
//! unary      := ("+" | "-") unary | power
//! power      := primary ("**" unary)?
//! primary    := NUMBER | NAME | NAME "(" args? ")" | "(" expression ")"
//! args       := expression ("," expression)*
//! ```

use super::{MAX_DEPTH, MAX_HEIGHT};
use super::number::Number;
use super::program::{BinaryOp, UnaryOp};
use super::token::{Token, TokenKind};
use crate::{GenError, Result};

/// Parsed tree whose names have not yet been resolved
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawExpr {
    Number(Number),
    Name {
        name: String,
        position: usize,
    },
    Call {
        name: String,
        position: usize,
        args: Vec<RawExpr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<RawExpr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<RawExpr>,
        rhs: Box<RawExpr>,
    },
}

/// Parse a full token stream; `input_len` is used to position end-of-input errors
pub(crate) fn parse(tokens: &[Token], input_len: usize) -> Result<RawExpr> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        height: 0,
        input_len,
    };
    let expr = parser.expression()?;
    if let Some(token) = parser.peek() {
        return Err(GenError::syntax(token.position, format!("unexpected {}", token.kind)));
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    // Longest path from the root built so far; bounds recursion in validate, evaluate and drop
    height: usize,
    input_len: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if &token.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn end_of_input(&self) -> GenError {
        GenError::syntax(self.input_len, "unexpected end of expression")
    }

    fn position(&self) -> usize {
        self.peek().map(|t| t.position).unwrap_or(self.input_len)
    }

    fn grow(&mut self, position: usize) -> Result<()> {
        self.height += 1;
        if self.height > MAX_HEIGHT {
            return Err(GenError::syntax(position, "expression has too many operations"));
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<RawExpr> {
        let mut lhs = self.term()?;
        let mut chain = 0;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => {
                    self.height -= chain;
                    return Ok(lhs);
                }
            };
            self.grow(self.position())?;
            chain += 1;
            self.pos += 1;
            let rhs = self.term()?;
            lhs = RawExpr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn term(&mut self) -> Result<RawExpr> {
        let mut lhs = self.unary()?;
        let mut chain = 0;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => {
                    self.height -= chain;
                    return Ok(lhs);
                }
            };
            self.grow(self.position())?;
            chain += 1;
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = RawExpr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    // Every recursive path passes through here, so the depth limit lives here
    fn unary(&mut self) -> Result<RawExpr> {
        let position = self.position();
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(GenError::syntax(position, "expression nested too deeply"));
        }
        self.grow(position)?;
        let result = self.unary_inner();
        self.depth -= 1;
        self.height -= 1;
        result
    }

    fn unary_inner(&mut self) -> Result<RawExpr> {
        let op = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Pos,
            _ => return self.power(),
        };
        self.pos += 1;
        let operand = self.unary()?;
        Ok(RawExpr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn power(&mut self) -> Result<RawExpr> {
        let base = self.primary()?;
        if self.eat(&TokenKind::StarStar) {
            let exponent = self.unary()?;
            return Ok(RawExpr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<RawExpr> {
        let token = self.next().ok_or_else(|| self.end_of_input())?;
        match &token.kind {
            TokenKind::Number(n) => Ok(RawExpr::Number(*n)),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let args = self.arguments(token.position)?;
                    Ok(RawExpr::Call {
                        name: name.clone(),
                        position: token.position,
                        args,
                    })
                } else {
                    Ok(RawExpr::Name {
                        name: name.clone(),
                        position: token.position,
                    })
                }
            }
            TokenKind::LParen => {
                let inner = self.expression()?;
                if !self.eat(&TokenKind::RParen) {
                    return Err(GenError::syntax(token.position, "unmatched '('"));
                }
                Ok(inner)
            }
            TokenKind::RParen => Err(GenError::syntax(token.position, "unmatched ')'")),
            other => Err(GenError::syntax(token.position, format!("unexpected {}", other))),
        }
    }

    fn arguments(&mut self, call_position: usize) -> Result<Vec<RawExpr>> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            if self.eat(&TokenKind::RParen) {
                return Ok(args);
            }
            return Err(match self.peek() {
                Some(token) => GenError::syntax(token.position, format!("expected ',' or ')', found {}", token.kind)),
                None => GenError::syntax(call_position, "unmatched '(' in call"),
            });
        }
    }
}
