//! Error types for LLVM code generation.

use thiserror::Error;

/// Error type for LLVM code generation.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// A variable was read, incremented, or decremented before any
    /// declaration, assignment, or parameter binding created its slot.
    #[error("line {line}: undefined variable: {name}")]
    UndefinedVariable { name: String, line: u32 },

    /// A string literal appeared somewhere other than as the direct
    /// operand of a print statement.
    #[error("line {line}: string literal is only valid as the operand of a print statement")]
    StringOutsidePrint { line: u32 },

    /// An LLVM builder operation failed.
    #[error("LLVM operation failed: {0}")]
    Builder(#[from] inkwell::builder::BuilderError),

    /// Internal error - indicates a bug.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CodeGenError {
    /// The source line the error refers to, when it has one.
    pub fn line(&self) -> Option<u32> {
        match self {
            CodeGenError::UndefinedVariable { line, .. }
            | CodeGenError::StringOutsidePrint { line } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;
