//! Line-form matchers.
//!
//! Each function here recognizes one line form of the catalog and extracts
//! its embedded pieces. Matchers are pure: they look at a trimmed line and
//! return `Option`; the dispatch order lives in `core`.
//!
//! The declare and function matchers search for the *first* particle
//! position that lets the rest of the line complete the form, so an
//! identifier may itself contain the particle character.

use crate::{is_tough_space, phrases};

/// Skips one-or-more whitespace characters, or fails.
fn skip_ws1(s: &str) -> Option<&str> {
    let t = s.trim_start_matches(is_tough_space);
    (t.len() < s.len()).then_some(t)
}

/// `我が名は　尊鷹` with any run of spaces between the halves.
pub(crate) fn program_start(line: &str) -> bool {
    match line.strip_prefix(phrases::PROGRAM_START_HEAD) {
        Some(rest) => skip_ws1(rest) == Some(phrases::PROGRAM_START_TAIL),
        None => false,
    }
}

/// `はっきり言ってそれって病気だから お前死ぬよ`.
pub(crate) fn throw(line: &str) -> bool {
    match line.strip_prefix(phrases::THROW_HEAD) {
        Some(rest) => skip_ws1(rest) == Some(phrases::THROW_TAIL),
        None => false,
    }
}

/// `（<label>のコメント）<rest>`.
///
/// Returns the comment token's value: the trimmed rest, or, when the rest is
/// empty, `<label>のコメント`.
pub(crate) fn comment(line: &str) -> Option<String> {
    let rest = line.strip_prefix('（')?;
    let mark = rest.find(phrases::COMMENT_MARK)?;
    if mark == 0 {
        return None;
    }
    let label = &rest[..mark];
    let trailing = rest[mark + phrases::COMMENT_MARK.len()..].trim_matches(is_tough_space);
    Some(if trailing.is_empty() {
        format!("{label}のコメント")
    } else {
        trailing.to_string()
    })
}

/// `<name>だ <name>が正体を現すぞ` where both names must be identical.
pub(crate) fn declare_pair(line: &str) -> Option<String> {
    let body = line.strip_suffix(phrases::DECLARE_REVEAL)?;
    for (i, _) in body.match_indices(phrases::DECLARE_DA) {
        let name = &body[..i];
        if name.is_empty() {
            continue;
        }
        let after = &body[i + phrases::DECLARE_DA.len_utf8()..];
        let Some(rest) = skip_ws1(after) else {
            continue;
        };
        if rest == name {
            return Some(name.trim_matches(is_tough_space).to_string());
        }
    }
    None
}

/// `自分たちの手で作るから尊いんだ <name>が (<params>)るんだ {`.
///
/// Params are split on commas and trimmed.
pub(crate) fn function_header(line: &str) -> Option<(String, Vec<String>)> {
    let rest = line.strip_prefix(phrases::FN_PREFIX)?;
    let rest = skip_ws1(rest)?;
    let body = rest.strip_suffix('{')?;
    let body = body.trim_end_matches(is_tough_space);
    let body = body.strip_suffix(phrases::FN_RUNDA)?;
    let body = body.strip_suffix(')')?;
    for (i, _) in body.match_indices(phrases::FN_GA) {
        let name = &body[..i];
        if name.is_empty() {
            continue;
        }
        let after = &body[i + phrases::FN_GA.len_utf8()..];
        let Some(params) = skip_ws1(after) else {
            continue;
        };
        let Some(params) = params.strip_prefix('(') else {
            continue;
        };
        if params.is_empty() {
            continue;
        }
        let params = params
            .split(',')
            .map(|p| p.trim_matches(is_tough_space).to_string())
            .collect();
        return Some((name.trim_matches(is_tough_space).to_string(), params));
    }
    None
}

/// `<keyword> (<cond>) {` - shared by the if and elif headers.
pub(crate) fn cond_header<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    let rest = skip_ws1(rest)?;
    let body = rest.strip_suffix('{')?;
    let body = body.trim_end_matches(is_tough_space);
    let body = body.strip_suffix(')')?;
    let cond = body.strip_prefix('(')?;
    (!cond.is_empty()).then_some(cond)
}

/// `う　あ　あ　あ　あ（ＰＣ書き文字） {`.
///
/// Whitespace between the syllables is any run of spaces, and the
/// parenthesis and P/C letters are accepted in both half- and full-width.
pub(crate) fn else_header(line: &str) -> bool {
    let matched = || -> Option<()> {
        let s = line.strip_prefix('う')?;
        let s = skip_ws1(s)?;
        let s = s.strip_prefix('あ')?;
        let s = skip_ws1(s)?;
        let s = s.strip_prefix('あ')?;
        let s = skip_ws1(s)?;
        let s = s.strip_prefix('あ')?;
        let s = skip_ws1(s)?;
        let s = s.strip_prefix('あ')?;
        let s = s.strip_prefix(['（', '('])?;
        let s = s.trim_start_matches(is_tough_space);
        let s = s.strip_prefix(['Ｐ', 'P'])?;
        let s = s.strip_prefix(['Ｃ', 'C'])?;
        let s = s.strip_prefix("書き文字")?;
        let s = s.trim_start_matches(is_tough_space);
        let s = s.strip_prefix(['）', ')'])?;
        let s = s.trim_start_matches(is_tough_space);
        (s == "{").then_some(())
    };
    matched().is_some()
}

/// `禁断の"<cond>度打ち" {`. The condition sits inside the quotes, directly
/// after the prefix.
pub(crate) fn while_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(phrases::WHILE_HEAD)?;
    let body = rest.strip_suffix('{')?;
    let body = body.trim_end_matches(is_tough_space);
    let body = body.strip_suffix(&phrases::QUOTE_CLOSE[..])?;
    let body = body.strip_suffix(phrases::WHILE_TAIL)?;
    let cond = body.strip_prefix(&phrases::QUOTE_OPEN[..])?;
    (!cond.is_empty()).then_some(cond)
}

/// `} <name> はルールで禁止スよね {`.
pub(crate) fn catch_header(line: &str) -> Option<String> {
    let rest = line.strip_prefix('}')?;
    let rest = rest.trim_start_matches(is_tough_space);
    let body = rest.strip_suffix('{')?;
    let body = body.trim_end_matches(is_tough_space);
    let body = body.strip_suffix(phrases::CATCH)?;
    let name = body.trim_end_matches(is_tough_space);
    if name.len() == body.len() || name.is_empty() {
        return None;
    }
    Some(name.trim_matches(is_tough_space).to_string())
}

/// `<expr> を継ぐ <name>`. Splits at the first keyword occurrence that has
/// whitespace on both sides.
pub(crate) fn assign(line: &str) -> Option<(&str, &str)> {
    for (i, _) in line.match_indices(phrases::ASSIGN_TSUGU) {
        let left = &line[..i];
        let right = &line[i + phrases::ASSIGN_TSUGU.len()..];
        let value = left.trim_end_matches(is_tough_space);
        if value.len() == left.len() || value.is_empty() {
            continue;
        }
        let target = right.trim_start_matches(is_tough_space);
        if target.len() == right.len() || target.is_empty() {
            continue;
        }
        return Some((value, target));
    }
    None
}

/// `<left> <keyword>` - shared by the print, input, increment, and
/// decrement statement forms. Returns the left part.
pub(crate) fn suffix<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let left = line.strip_suffix(keyword)?;
    let value = left.trim_end_matches(is_tough_space);
    (value.len() < left.len() && !value.is_empty()).then_some(value)
}
