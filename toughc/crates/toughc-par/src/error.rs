//! Error types for parsing.

use thiserror::Error;
use toughc_lex::TokenKind;

/// Error type for parsing.
///
/// Parsing stops at the first error; there is no recovery. Every variant
/// carries the 1-based source line of the offending token.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The current token is not the kind the grammar requires here.
    #[error("line {line}: expected {expected:?}, found {found:?} ({value:?})")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        value: String,
        line: u32,
    },

    /// The token stream ended in the middle of a construct.
    #[error("line {line}: unexpected end of input")]
    UnexpectedEof { line: u32 },

    /// An expression statement did not end with a statement keyword.
    #[error("line {line}: statement does not end with a statement keyword, found {found:?}")]
    UnterminatedStatement { found: TokenKind, line: u32 },

    /// An expression was required but the current token cannot start one.
    #[error("line {line}: expected an expression, found {found:?}")]
    ExpectedExpression { found: TokenKind, line: u32 },

    /// A numeric literal does not fit the value type.
    #[error("line {line}: numeric literal out of range: {text}")]
    InvalidNumber { text: String, line: u32 },

    /// A recognized but unsupported construct (catch clauses).
    #[error("line {line}: {construct} is not supported")]
    Unsupported { construct: &'static str, line: u32 },
}

impl ParseError {
    /// The source line the error refers to.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedEof { line }
            | ParseError::UnterminatedStatement { line, .. }
            | ParseError::ExpectedExpression { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::Unsupported { line, .. } => *line,
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
