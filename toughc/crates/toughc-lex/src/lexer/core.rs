//! Core lexer implementation.
//!
//! The lexer walks the source line by line and dispatches each non-blank
//! trimmed line through the matcher catalog. Matcher order is part of the
//! language definition: the declare pair must come before the generic
//! suffix forms, and the catch header before the lone closing brace.

use crate::error::{LexError, Result};
use crate::lexer::{expr, line};
use crate::{is_tough_space, phrases, Token, TokenKind};

/// Lexer for TOUGH source code.
///
/// Produces the whole token stream at once; each tokenized line is followed
/// by a NEWLINE token and the stream ends with EOF.
///
/// # Example
///
/// ```
/// use toughc_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("「Hello」 しゃあっ").tokenize().unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Str);
/// assert_eq!(tokens[1].kind, TokenKind::Print);
/// ```
pub struct Lexer<'a> {
    /// The source text being tokenized.
    source: &'a str,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenizes the whole source.
    ///
    /// # Errors
    /// Returns the first [`LexError`] encountered; nothing is recovered.
    pub fn tokenize(&self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut line_count: u32 = 0;

        for (idx, raw) in self.source.lines().enumerate() {
            line_count = idx as u32 + 1;
            let trimmed = raw.trim().trim_matches(is_tough_space);
            if trimmed.is_empty() {
                continue;
            }
            self.tokenize_line(trimmed, line_count, &mut tokens)?;
            tokens.push(Token::new(TokenKind::Newline, "\\n", line_count));
        }

        tokens.push(Token::new(TokenKind::Eof, "", line_count + 1));
        Ok(tokens)
    }

    /// Tokenizes one trimmed, non-empty line.
    fn tokenize_line(&self, text: &str, line: u32, tokens: &mut Vec<Token>) -> Result<()> {
        use TokenKind::*;

        // Whole-line phrases.
        if line::program_start(text) {
            tokens.push(Token::new(ProgramStart, text, line));
            return Ok(());
        }
        if text == phrases::PROGRAM_END {
            tokens.push(Token::new(ProgramEnd, text, line));
            return Ok(());
        }
        if line::throw(text) {
            tokens.push(Token::new(Throw, text, line));
            return Ok(());
        }

        if let Some(value) = line::comment(text) {
            tokens.push(Token::new(Comment, value, line));
            return Ok(());
        }

        if let Some(name) = line::declare_pair(text) {
            tokens.push(Token::new(DeclareDa, name.clone(), line));
            tokens.push(Token::new(DeclareReveal, name, line));
            return Ok(());
        }

        if let Some((name, params)) = line::function_header(text) {
            tokens.push(Token::new(FnPrefix, phrases::FN_PREFIX, line));
            tokens.push(Token::new(Ident, name, line));
            tokens.push(Token::new(FnGa, "が", line));
            for param in params {
                tokens.push(Token::new(Ident, param, line));
            }
            tokens.push(Token::new(FnRunda, phrases::FN_RUNDA, line));
            tokens.push(Token::new(LBrace, "{", line));
            return Ok(());
        }

        if let Some(cond) = line::cond_header(text, phrases::IF) {
            tokens.push(Token::new(If, phrases::IF, line));
            self.push_condition(cond, line, tokens)?;
            return Ok(());
        }
        if let Some(cond) = line::cond_header(text, phrases::ELIF) {
            tokens.push(Token::new(Elif, phrases::ELIF, line));
            self.push_condition(cond, line, tokens)?;
            return Ok(());
        }
        if line::else_header(text) {
            tokens.push(Token::new(Else, phrases::ELSE, line));
            tokens.push(Token::new(LBrace, "{", line));
            return Ok(());
        }
        if let Some(cond) = line::while_header(text) {
            tokens.push(Token::new(While, phrases::WHILE_HEAD, line));
            self.push_condition(cond, line, tokens)?;
            return Ok(());
        }

        if let Some(name) = line::catch_header(text) {
            tokens.push(Token::new(RBrace, "}", line));
            tokens.push(Token::new(Catch, phrases::CATCH, line));
            tokens.push(Token::new(Ident, name, line));
            tokens.push(Token::new(LBrace, "{", line));
            return Ok(());
        }

        if text == "}" {
            tokens.push(Token::new(RBrace, "}", line));
            return Ok(());
        }

        // Statement suffixes, assignment first.
        if let Some((value, target)) = line::assign(text) {
            expr::tokenize_expr(value, line, tokens)?;
            tokens.push(Token::new(AssignTsugu, phrases::ASSIGN_TSUGU, line));
            tokens.push(Token::new(Ident, target, line));
            return Ok(());
        }
        if let Some(value) = line::suffix(text, phrases::PRINT) {
            expr::tokenize_expr(value, line, tokens)?;
            tokens.push(Token::new(Print, phrases::PRINT, line));
            return Ok(());
        }
        if let Some(name) = line::suffix(text, phrases::INPUT) {
            tokens.push(Token::new(Ident, name, line));
            tokens.push(Token::new(Input, phrases::INPUT, line));
            return Ok(());
        }
        if let Some(name) = line::suffix(text, phrases::INCREMENT) {
            tokens.push(Token::new(Ident, name, line));
            tokens.push(Token::new(Increment, phrases::INCREMENT, line));
            return Ok(());
        }
        if let Some(name) = line::suffix(text, phrases::DECREMENT) {
            tokens.push(Token::new(Ident, name, line));
            tokens.push(Token::new(Decrement, phrases::DECREMENT, line));
            return Ok(());
        }

        Err(LexError::UnrecognizedLine {
            text: text.to_string(),
            line,
        })
    }

    /// Emits `( <expr tokens> ) {` for a control header's condition.
    fn push_condition(&self, cond: &str, line: u32, tokens: &mut Vec<Token>) -> Result<()> {
        tokens.push(Token::new(TokenKind::LParen, "(", line));
        expr::tokenize_expr(cond.trim_matches(is_tough_space), line, tokens)?;
        tokens.push(Token::new(TokenKind::RParen, ")", line));
        tokens.push(Token::new(TokenKind::LBrace, "{", line));
        Ok(())
    }
}
