//! Expression parsing.
//!
//! TOUGH has a deliberately flat expression grammar: one left-associative
//! level holding the four comparisons and `%`, over primaries. There is no
//! unary, additive, or multiplicative layer.

use toughc_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseError, Result};
use crate::Parser;

impl Parser {
    /// Parses a left-associative chain of binary operators.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_primary()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Eq => BinOp::Eq,
                TokenKind::Neq => BinOp::Neq,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Percent => BinOp::Rem,
                _ => break,
            };
            let op_token = self.advance();
            let right = self.parse_primary()?;
            left = Expr::Binary(BinaryExpr {
                op,
                lhs: Box::new(left),
                rhs: Box::new(right),
                line: op_token.line,
            });
        }

        Ok(left)
    }

    /// Parses a primary expression: literal, identifier, or parenthesized
    /// expression.
    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Int => {
                self.advance();
                let value = token.value.parse().map_err(|_| ParseError::InvalidNumber {
                    text: token.value.clone(),
                    line: token.line,
                })?;
                Ok(Expr::Int(IntLit {
                    value,
                    line: token.line,
                }))
            }
            TokenKind::Float => {
                self.advance();
                let value = token.value.parse().map_err(|_| ParseError::InvalidNumber {
                    text: token.value.clone(),
                    line: token.line,
                })?;
                Ok(Expr::Float(FloatLit {
                    value,
                    line: token.line,
                }))
            }
            TokenKind::Str => {
                self.advance();
                Ok(Expr::Str(StrLit {
                    value: token.value,
                    line: token.line,
                }))
            }
            TokenKind::Ident => {
                self.advance();
                Ok(Expr::Ident(Ident {
                    name: token.value,
                    line: token.line,
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEof { line: token.line }),
            _ => Err(ParseError::ExpectedExpression {
                found: token.kind,
                line: token.line,
            }),
        }
    }
}
