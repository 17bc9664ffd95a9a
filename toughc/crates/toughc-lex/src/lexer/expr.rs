//! Expression sub-lexer.
//!
//! Scans the expression part of a line left to right, skipping whitespace
//! and recognizing, in order: comparison phrases (longest first), string
//! literals, numbers, `%`, parentheses, and identifiers.

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::{is_ident_continue, is_ident_start, is_tough_space, phrases, Token, TokenKind};

/// Comparison phrases in match order. The negated form contains the
/// positive one and must be tried first.
const COMPARISONS: [(&str, TokenKind); 4] = [
    (phrases::NEQ, TokenKind::Neq),
    (phrases::EQ, TokenKind::Eq),
    (phrases::GT, TokenKind::Gt),
    (phrases::LT, TokenKind::Lt),
];

/// Tokenizes one expression slice, appending to `tokens`.
pub(crate) fn tokenize_expr(expr: &str, line: u32, tokens: &mut Vec<Token>) -> Result<()> {
    let mut cursor = Cursor::new(expr);

    'scan: while !cursor.is_at_end() {
        let c = cursor.current_char();

        if is_tough_space(c) {
            cursor.advance();
            continue;
        }

        for (phrase, kind) in COMPARISONS {
            if cursor.eat_phrase(phrase) {
                tokens.push(Token::new(kind, phrase, line));
                continue 'scan;
            }
        }

        if c == '「' {
            let inner = &cursor.rest()['「'.len_utf8()..];
            let Some(end) = inner.find('」') else {
                return Err(LexError::UnterminatedString { line });
            };
            tokens.push(Token::new(TokenKind::Str, &inner[..end], line));
            cursor.advance_bytes('「'.len_utf8() + end + '」'.len_utf8());
            continue;
        }

        if c.is_ascii_digit() || (c == '-' && cursor.peek_char().is_ascii_digit()) {
            let mut text = String::new();
            if c == '-' {
                text.push('-');
                cursor.advance();
            }
            text.push_str(cursor.eat_while(|ch| ch.is_ascii_digit()));

            // A fraction part only counts when a digit follows the dot.
            let kind = if cursor.current_char() == '.' && cursor.peek_char().is_ascii_digit() {
                text.push('.');
                cursor.advance();
                text.push_str(cursor.eat_while(|ch| ch.is_ascii_digit()));
                TokenKind::Float
            } else {
                TokenKind::Int
            };
            tokens.push(Token::new(kind, text, line));
            continue;
        }

        match c {
            '%' => {
                tokens.push(Token::new(TokenKind::Percent, "%", line));
                cursor.advance();
            }
            '(' => {
                tokens.push(Token::new(TokenKind::LParen, "(", line));
                cursor.advance();
            }
            ')' => {
                tokens.push(Token::new(TokenKind::RParen, ")", line));
                cursor.advance();
            }
            _ if is_ident_start(c) => {
                let name = cursor.eat_while(is_ident_continue);
                tokens.push(Token::new(TokenKind::Ident, name, line));
            }
            _ => return Err(LexError::UnrecognizedChar { ch: c, line }),
        }
    }

    Ok(())
}
