//! toughc-par - AST Node Definitions
//!
//! This module contains all AST node definitions produced by the parser.
//! Every node carries the 1-based source line it came from, so later
//! phases can report errors against the original text.

/// AST root - a source file is a flat list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Program opening bookend. No-op at code generation.
    ProgramStart { line: u32 },

    /// Program closing bookend. Lowered to `exit(0)`.
    ProgramEnd { line: u32 },

    /// Throw statement. Lowered to `exit(1)`.
    Throw { line: u32 },

    /// Comment line. Discarded at code generation.
    Comment(CommentStmt),

    /// Variable declaration, zero-initialized.
    Declare(DeclareStmt),

    /// Assignment; allocates the slot on first use.
    Assign(AssignStmt),

    /// Print statement.
    Print(PrintStmt),

    /// Input statement; allocates the slot on first use.
    Input(InputStmt),

    /// Increment of an existing variable.
    Increment(IncrementStmt),

    /// Decrement of an existing variable.
    Decrement(DecrementStmt),

    /// Conditional with optional elif chain and else body.
    If(IfStmt),

    /// Pre-tested loop.
    While(WhileStmt),

    /// Function definition with an isolated variable scope.
    Fn(FnStmt),
}

/// Comment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStmt {
    pub text: String,
    pub line: u32,
}

/// Variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareStmt {
    pub name: String,
    pub line: u32,
}

/// Assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub value: Expr,
    pub line: u32,
}

/// Print statement.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Expr,
    pub line: u32,
}

/// Input statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub name: String,
    pub line: u32,
}

/// Increment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementStmt {
    pub name: String,
    pub line: u32,
}

/// Decrement statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DecrementStmt {
    pub name: String,
    pub line: u32,
}

/// If statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub elif_clauses: Vec<ElifClause>,
    pub else_body: Vec<Stmt>,
    pub line: u32,
}

/// One elif arm of an [`IfStmt`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElifClause {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// While statement.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub line: u32,
}

/// Function definition.
///
/// The body does not inherit the surrounding variables; it starts with a
/// fresh scope containing only the parameter slots.
#[derive(Debug, Clone, PartialEq)]
pub struct FnStmt {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: u32,
}

impl Stmt {
    /// The source line the statement starts on.
    pub fn line(&self) -> u32 {
        match self {
            Stmt::ProgramStart { line } | Stmt::ProgramEnd { line } | Stmt::Throw { line } => *line,
            Stmt::Comment(s) => s.line,
            Stmt::Declare(s) => s.line,
            Stmt::Assign(s) => s.line,
            Stmt::Print(s) => s.line,
            Stmt::Input(s) => s.line,
            Stmt::Increment(s) => s.line,
            Stmt::Decrement(s) => s.line,
            Stmt::If(s) => s.line,
            Stmt::While(s) => s.line,
            Stmt::Fn(s) => s.line,
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Int(IntLit),

    /// Float literal. Kept in the AST; truncated to integer at code
    /// generation.
    Float(FloatLit),

    /// String literal. Only valid as the direct operand of a print
    /// statement.
    Str(StrLit),

    /// Variable reference.
    Ident(Ident),

    /// Binary operation.
    Binary(BinaryExpr),
}

/// Integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntLit {
    pub value: i64,
    pub line: u32,
}

/// Float literal.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLit {
    pub value: f64,
    pub line: u32,
}

/// String literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StrLit {
    pub value: String,
    pub line: u32,
}

/// Variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub line: u32,
}

/// Binary operation. All five operators share a single precedence level
/// and associate to the left.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub line: u32,
}

/// Binary operators. Comparisons produce 0 or 1; `Rem` is the signed
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Neq,
    Gt,
    Lt,
    Rem,
}

impl Expr {
    /// The source line the expression starts on.
    pub fn line(&self) -> u32 {
        match self {
            Expr::Int(e) => e.line,
            Expr::Float(e) => e.line,
            Expr::Str(e) => e.line,
            Expr::Ident(e) => e.line,
            Expr::Binary(e) => e.line,
        }
    }
}
