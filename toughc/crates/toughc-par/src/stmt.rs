//! Statement parsing - declarations, control flow, functions, and the
//! expression statement path.

use toughc_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseError, Result};
use crate::Parser;

impl Parser {
    /// Parses a single statement, dispatching on the current token kind.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt> {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Comment => {
                self.advance();
                Ok(Stmt::Comment(CommentStmt {
                    text: token.value,
                    line: token.line,
                }))
            }
            TokenKind::ProgramStart => {
                self.advance();
                Ok(Stmt::ProgramStart { line: token.line })
            }
            TokenKind::ProgramEnd => {
                self.advance();
                Ok(Stmt::ProgramEnd { line: token.line })
            }
            TokenKind::Throw => {
                self.advance();
                Ok(Stmt::Throw { line: token.line })
            }
            TokenKind::DeclareDa => self.parse_declare(),
            TokenKind::FnPrefix => self.parse_fn(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Catch => Err(ParseError::Unsupported {
                construct: "catch clause",
                line: token.line,
            }),
            TokenKind::Eof => Err(ParseError::UnexpectedEof { line: token.line }),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `<name>だ <name>が正体を現すぞ` - both tokens carry the name.
    fn parse_declare(&mut self) -> Result<Stmt> {
        let token = self.advance();
        self.expect(TokenKind::DeclareReveal)?;
        Ok(Stmt::Declare(DeclareStmt {
            name: token.value,
            line: token.line,
        }))
    }

    /// Function definition: prefix, name, separator, parameters up to the
    /// terminator, then a block.
    fn parse_fn(&mut self) -> Result<Stmt> {
        let token = self.advance();
        let name = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::FnGa)?;

        let mut params = Vec::new();
        while self.current().kind == TokenKind::Ident && self.peek(1).kind != TokenKind::FnRunda {
            params.push(self.advance().value);
        }
        if self.current().kind == TokenKind::Ident {
            params.push(self.advance().value);
        }

        self.expect(TokenKind::FnRunda)?;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Stmt::Fn(FnStmt {
            name: name.value,
            params,
            body,
            line: token.line,
        }))
    }

    /// If statement with optional elif chain and else body.
    fn parse_if(&mut self) -> Result<Stmt> {
        let token = self.advance();
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let then_body = self.parse_block()?;

        let mut elif_clauses = Vec::new();
        while self.current().kind == TokenKind::Elif {
            self.advance();
            self.expect(TokenKind::LParen)?;
            let condition = self.parse_expr()?;
            self.expect(TokenKind::RParen)?;
            self.expect(TokenKind::LBrace)?;
            let body = self.parse_block()?;
            elif_clauses.push(ElifClause { condition, body });
        }

        let mut else_body = Vec::new();
        if self.current().kind == TokenKind::Else {
            self.advance();
            self.expect(TokenKind::LBrace)?;
            else_body = self.parse_block()?;
        }

        Ok(Stmt::If(IfStmt {
            condition,
            then_body,
            elif_clauses,
            else_body,
            line: token.line,
        }))
    }

    /// While statement.
    fn parse_while(&mut self) -> Result<Stmt> {
        let token = self.advance();
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_block()?;

        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            line: token.line,
        }))
    }

    /// Parses statements until `}` or EOF, consuming the closing brace.
    fn parse_block(&mut self) -> Result<Vec<Stmt>> {
        let mut statements = Vec::new();
        self.skip_newlines();

        while !matches!(self.current().kind, TokenKind::RBrace | TokenKind::Eof) {
            statements.push(self.parse_stmt()?);
            self.skip_newlines();
        }

        if self.current().kind == TokenKind::RBrace {
            self.advance();
        }
        self.skip_newlines();
        Ok(statements)
    }

    /// The expression statement path: assign, print, input, increment,
    /// decrement.
    ///
    /// Input, increment, and decrement take a bare identifier rather than
    /// an arbitrary expression, so they are recognized by lookahead before
    /// the expression parser runs.
    fn parse_expr_stmt(&mut self) -> Result<Stmt> {
        let token = self.current().clone();

        if token.kind == TokenKind::Ident {
            match self.peek(1).kind {
                TokenKind::Increment => {
                    self.advance();
                    self.advance();
                    return Ok(Stmt::Increment(IncrementStmt {
                        name: token.value,
                        line: token.line,
                    }));
                }
                TokenKind::Decrement => {
                    self.advance();
                    self.advance();
                    return Ok(Stmt::Decrement(DecrementStmt {
                        name: token.value,
                        line: token.line,
                    }));
                }
                TokenKind::Input => {
                    self.advance();
                    self.advance();
                    return Ok(Stmt::Input(InputStmt {
                        name: token.value,
                        line: token.line,
                    }));
                }
                _ => {}
            }
        }

        let value = self.parse_expr()?;
        let current = self.current().clone();

        match current.kind {
            TokenKind::Print => {
                self.advance();
                Ok(Stmt::Print(PrintStmt {
                    value,
                    line: token.line,
                }))
            }
            TokenKind::AssignTsugu => {
                self.advance();
                let target = self.expect(TokenKind::Ident)?;
                Ok(Stmt::Assign(AssignStmt {
                    name: target.value,
                    value,
                    line: token.line,
                }))
            }
            _ => Err(ParseError::UnterminatedStatement {
                found: current.kind,
                line: current.line,
            }),
        }
    }
}
