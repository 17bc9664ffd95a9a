//! toughc-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXING MODEL
//! ============================================================================
//!
//! TOUGH is a line-oriented language: every non-blank source line is exactly
//! one statement, control header, or block footer. The lexer therefore does
//! not scan a free-form character stream the way a C-family lexer would.
//! Instead it works in two layers:
//!
//! 1. LINE MATCHERS
//!    Each trimmed line is tried against an ordered catalog of line forms
//!    (program bookends, comment, declare pair, function header, control
//!    headers, catch header, lone brace, statement suffixes). The first
//!    matching form decides how the line decomposes into tokens. A NEWLINE
//!    token terminates every tokenized line, and EOF terminates the stream.
//!
//! 2. EXPRESSION SUB-LEXER
//!    Line forms that embed an expression (condition headers, assignment and
//!    print statements) hand the expression text to a left-to-right scanner
//!    that recognizes comparison phrases, string literals, numbers, `%`,
//!    parentheses, and identifiers.
//!
//! ORDERING IS LOAD-BEARING:
//! -------------------------
//! - The negated comparison phrase contains the positive one, so the
//!   sub-lexer must try the longer phrase first.
//! - The declare pair must be tried before the generic suffix forms, or the
//!   paired identifier would be torn apart by the assignment matcher.
//!
//! WHITESPACE:
//! -----------
//! ASCII space, tab, and the ideographic space U+3000 are interchangeable
//! wherever a line form tolerates whitespace. Source text is UTF-8; several
//! phrases contain full-width punctuation (`（）`, `「」`, full-width Ｐ/Ｃ)
//! that must be matched verbatim.
//!
//! ============================================================================
//! ERRORS
//! ============================================================================
//!
//! Lexing aborts on the first error. A line matching no catalog entry, an
//! unknown character inside an expression, and an unterminated `「…」` string
//! all produce a [`LexError`] carrying the 1-based source line.

pub mod cursor;
mod error;
mod lexer;
pub mod phrases;

pub use error::{LexError, Result};
pub use lexer::Lexer;

/// A lexical unit of TOUGH source code.
///
/// Tokens are produced wholesale by [`Lexer::tokenize`] and consumed
/// monotonically by the parser. The `value` field carries the matched text;
/// for the declare, function, and catch forms, which embed an identifier
/// inside the phrase itself, it carries the extracted name instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Which lexical category this token belongs to.
    pub kind: TokenKind,

    /// The matched phrase or extracted name.
    pub value: String,

    /// 1-based source line the token was read from.
    pub line: u32,
}

impl Token {
    /// Creates a token from its parts.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }
}

/// Token categories.
///
/// One variant per recognized TOUGH phrase, plus literals, structural
/// punctuation, and the NEWLINE/EOF stream markers. The enumeration is
/// closed: the parser dispatches exhaustively on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal, e.g. `42` or `-7`.
    Int,

    /// Float literal, e.g. `3.14`. Kept through the pipeline but truncated
    /// to integer at code generation.
    Float,

    /// String literal `「…」`. The value is the text between the brackets.
    Str,

    /// Identifier: variable or function name.
    Ident,

    // =========================================================================
    // PROGRAM STRUCTURE
    // =========================================================================
    /// Program opening bookend: `我が名は　尊鷹`.
    ProgramStart,

    /// Program closing bookend: `逃げるんかいっ`. Lowered to `exit(0)`.
    ProgramEnd,

    // =========================================================================
    // VARIABLES
    // =========================================================================
    /// First half of the declare pair `<name>だ …`. Value is the name.
    DeclareDa,

    /// Second half of the declare pair `… <name>が正体を現すぞ`.
    DeclareReveal,

    /// Assignment keyword `を継ぐ`, as in `42 を継ぐ x`.
    AssignTsugu,

    // =========================================================================
    // INPUT / OUTPUT
    // =========================================================================
    /// Print keyword `しゃあっ`.
    Print,

    /// Input keyword `を教えてくれよ`.
    Input,

    // =========================================================================
    // INCREMENT / DECREMENT
    // =========================================================================
    /// Increment keyword `進化したと言うてくれや`.
    Increment,

    /// Decrement keyword `（哀）`.
    Decrement,

    // =========================================================================
    // COMPARISON OPERATORS
    // =========================================================================
    /// `ガチンコ` (==).
    Eq,

    /// `ガチンコじゃない` (!=). Must be tried before [`TokenKind::Eq`].
    Neq,

    /// `を超えた` (>).
    Gt,

    /// `に及ばない` (<).
    Lt,

    // =========================================================================
    // CONTROL FLOW
    // =========================================================================
    /// If header keyword `なにっ`.
    If,

    /// Elif header keyword `いやちょっとまてよ`.
    Elif,

    /// Else header `う　あ　あ　あ　あ（ＰＣ書き文字）`.
    Else,

    /// While header prefix `禁断の"…度打ち"`.
    While,

    /// Function header prefix `自分たちの手で作るから尊いんだ`.
    FnPrefix,

    /// Function name separator `が`.
    FnGa,

    /// Function parameter-list terminator `るんだ`.
    FnRunda,

    // =========================================================================
    // EXCEPTIONS
    // =========================================================================
    /// Catch header keyword `はルールで禁止スよね`. Recognized by the lexer
    /// but rejected downstream; the binding semantics are undefined.
    Catch,

    /// Throw statement `はっきり言ってそれって病気だから お前死ぬよ`.
    /// Lowered to `exit(1)`.
    Throw,

    // =========================================================================
    // COMMENTS
    // =========================================================================
    /// Comment line `（○○のコメント）…`. Value is the comment text.
    Comment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `{`
    LBrace,

    /// `}`
    RBrace,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `%` - signed remainder operator.
    Percent,

    // =========================================================================
    // STREAM MARKERS
    // =========================================================================
    /// End of a tokenized source line.
    Newline,

    /// End of the token stream.
    Eof,
}

/// Returns true for the whitespace characters TOUGH line forms tolerate:
/// ASCII space, tab, and the ideographic space U+3000.
pub fn is_tough_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '　')
}

/// Returns true if `c` may start an identifier.
///
/// Identifiers cover ASCII letters, underscore, and the Hiragana through
/// CJK Unified Ideographs range (U+3040..=U+9FFF).
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || ('\u{3040}'..='\u{9fff}').contains(&c)
}

/// Returns true if `c` may continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
