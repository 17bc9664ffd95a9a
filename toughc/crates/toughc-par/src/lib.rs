//! toughc-par - Parser (Syntactic Analyzer)
//!
//! ============================================================================
//! PARSING MODEL
//! ============================================================================
//!
//! The parser is a plain recursive-descent parser with one-token lookahead
//! over the stream produced by `toughc-lex`. Because the lexer already
//! resolved each line into a statement-shaped token sequence, the grammar
//! is nearly LL(1):
//!
//! - Statements are dispatched on the first token's kind. Dedicated keyword
//!   tokens (comment, bookends, throw, declare, function prefix, if, while)
//!   go straight to their productions.
//! - Everything else takes the EXPRESSION STATEMENT path: parse an
//!   expression, then classify the statement by the trailing keyword
//!   (print, assign). Increment, decrement, and input take a bare
//!   identifier rather than an expression, so a two-token lookahead
//!   short-circuit handles `IDENT INCREMENT`-shaped lines before the
//!   expression parser runs.
//! - Blocks are brace-delimited; a block returns when it sees `}` or EOF.
//!   NEWLINE tokens are skipped between statements.
//!
//! EXPRESSIONS:
//! ------------
//! Primary expressions are literals, identifiers, and parenthesized
//! expressions. On top sits a single left-associative operator level
//! covering all four comparisons and `%`; the language has no precedence
//! tower.
//!
//! ERRORS:
//! -------
//! The first [`ParseError`] aborts parsing. Catch clauses are recognized
//! lexically but have no defined binding semantics, so the parser rejects
//! them with a dedicated error instead of guessing.

mod ast;
mod error;
mod expr;
mod stmt;

pub use ast::*;
pub use error::{ParseError, Result};

use toughc_lex::{Token, TokenKind};

/// Parser for the TOUGH language.
pub struct Parser {
    /// Token stream from the lexer.
    tokens: Vec<Token>,

    /// Current position in the token stream.
    position: usize,

    /// Fallback token handed out past the end of the stream.
    eof: Token,
}

impl Parser {
    /// Creates a parser over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_line = tokens.last().map(|t| t.line).unwrap_or(1);
        Self {
            tokens,
            position: 0,
            eof: Token::new(TokenKind::Eof, "", eof_line),
        }
    }

    /// Parses the whole token stream into a [`Program`].
    pub fn parse(&mut self) -> Result<Program> {
        let mut statements = Vec::new();
        self.skip_newlines();

        while self.current().kind != TokenKind::Eof {
            statements.push(self.parse_stmt()?);
            self.skip_newlines();
        }

        Ok(Program { statements })
    }

    /// The token under the cursor.
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    /// The token `offset` positions ahead of the cursor.
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        self.tokens.get(self.position + offset).unwrap_or(&self.eof)
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        self.position += 1;
        token
    }

    /// Consumes the current token if it has the expected kind, errors
    /// otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.current();
        if token.kind == kind {
            Ok(self.advance())
        } else if token.kind == TokenKind::Eof {
            Err(ParseError::UnexpectedEof { line: token.line })
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                value: token.value.clone(),
                line: token.line,
            })
        }
    }

    /// Discards a run of NEWLINE tokens.
    pub(crate) fn skip_newlines(&mut self) {
        while self.current().kind == TokenKind::Newline {
            self.position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toughc_lex::Lexer;

    fn parse(source: &str) -> Result<Program> {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        Parser::new(tokens).parse()
    }

    #[test]
    fn parses_declare_assign_print() {
        let program = parse("xだ xが正体を現すぞ\n42 を継ぐ x\nx しゃあっ").unwrap();
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(&program.statements[0], Stmt::Declare(d) if d.name == "x"));
        match &program.statements[1] {
            Stmt::Assign(a) => {
                assert_eq!(a.name, "x");
                assert_eq!(a.value, Expr::Int(IntLit { value: 42, line: 2 }));
            }
            other => panic!("expected assignment, got {other:?}"),
        }
        assert!(matches!(&program.statements[2], Stmt::Print(_)));
    }

    #[test]
    fn parses_program_bookends_and_comment() {
        let program = parse("我が名は　尊鷹\n（俺のコメント）メモ\n逃げるんかいっ").unwrap();
        assert!(matches!(program.statements[0], Stmt::ProgramStart { line: 1 }));
        assert!(matches!(&program.statements[1], Stmt::Comment(c) if c.text == "メモ"));
        assert!(matches!(program.statements[2], Stmt::ProgramEnd { line: 3 }));
    }

    #[test]
    fn parses_if_elif_else_chain() {
        let src = "なにっ (x ガチンコ 1) {\n\
                   「one」 しゃあっ\n\
                   }\n\
                   いやちょっとまてよ (x ガチンコ 5) {\n\
                   「five」 しゃあっ\n\
                   }\n\
                   う　あ　あ　あ　あ（ＰＣ書き文字） {\n\
                   「other」 しゃあっ\n\
                   }";
        let program = parse(src).unwrap();
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::If(stmt) => {
                assert_eq!(stmt.then_body.len(), 1);
                assert_eq!(stmt.elif_clauses.len(), 1);
                assert_eq!(stmt.else_body.len(), 1);
            }
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn parses_while_with_increment_body() {
        let src = "禁断の\"x に及ばない 3 度打ち\" {\n\
                   x 進化したと言うてくれや\n\
                   }";
        let program = parse(src).unwrap();
        match &program.statements[0] {
            Stmt::While(stmt) => {
                assert!(matches!(&stmt.condition, Expr::Binary(b) if b.op == BinOp::Lt));
                assert!(matches!(&stmt.body[0], Stmt::Increment(i) if i.name == "x"));
            }
            other => panic!("expected while, got {other:?}"),
        }
    }

    #[test]
    fn parses_function_with_params() {
        let src = "自分たちの手で作るから尊いんだ foo が (a, b)るんだ {\n\
                   a しゃあっ\n\
                   }";
        let program = parse(src).unwrap();
        match &program.statements[0] {
            Stmt::Fn(stmt) => {
                assert_eq!(stmt.name, "foo");
                assert_eq!(stmt.params, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(stmt.body.len(), 1);
            }
            other => panic!("expected fn, got {other:?}"),
        }
    }

    #[test]
    fn binary_chain_is_left_associative() {
        let program = parse("1 ガチンコ 2 ガチンコ 3 しゃあっ").unwrap();
        match &program.statements[0] {
            Stmt::Print(p) => match &p.value {
                Expr::Binary(outer) => {
                    assert_eq!(outer.op, BinOp::Eq);
                    assert!(matches!(&*outer.lhs, Expr::Binary(_)));
                    assert!(matches!(&*outer.rhs, Expr::Int(_)));
                }
                other => panic!("expected binary, got {other:?}"),
            },
            other => panic!("expected print, got {other:?}"),
        }
    }

    #[test]
    fn parenthesized_expression_groups() {
        let program = parse("(x % 2) ガチンコ 0 しゃあっ").unwrap();
        match &program.statements[0] {
            Stmt::Print(p) => match &p.value {
                Expr::Binary(outer) => {
                    assert_eq!(outer.op, BinOp::Eq);
                    assert!(matches!(&*outer.lhs, Expr::Binary(b) if b.op == BinOp::Rem));
                }
                other => panic!("expected binary, got {other:?}"),
            },
            other => panic!("expected print, got {other:?}"),
        }
    }

    #[test]
    fn float_literal_survives_to_ast() {
        let program = parse("3.5 を継ぐ x").unwrap();
        match &program.statements[0] {
            Stmt::Assign(a) => assert_eq!(a.value, Expr::Float(FloatLit { value: 3.5, line: 1 })),
            other => panic!("expected assign, got {other:?}"),
        }
    }

    #[test]
    fn throw_parses_as_statement() {
        let program = parse("はっきり言ってそれって病気だから お前死ぬよ").unwrap();
        assert!(matches!(program.statements[0], Stmt::Throw { line: 1 }));
    }

    #[test]
    fn catch_clause_is_rejected() {
        let src = "なにっ (x ガチンコ 1) {\n\
                   「a」 しゃあっ\n\
                   } e はルールで禁止スよね {\n\
                   「b」 しゃあっ\n\
                   }";
        let err = parse(src).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { line: 3, .. }));
    }

    #[test]
    fn dangling_expression_is_an_error() {
        // A bare expression with no trailing statement keyword can only be
        // formed through the token API, never by the line lexer.
        let tokens = vec![
            Token::new(TokenKind::Int, "1", 1),
            Token::new(TokenKind::Newline, "\\n", 1),
            Token::new(TokenKind::Eof, "", 2),
        ];
        let err = Parser::new(tokens).parse().unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedStatement { .. }));
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let tokens = vec![Token::new(TokenKind::DeclareDa, "x", 1)];
        let err = Parser::new(tokens).parse().unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn unclosed_condition_is_an_error() {
        let err = parse("なにっ (1 2) {\n「a」 しゃあっ\n}").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::RParen,
                ..
            }
        ));
    }

    #[test]
    fn stray_closing_brace_is_an_error() {
        let err = parse("}").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedExpression { .. }));
    }
}
