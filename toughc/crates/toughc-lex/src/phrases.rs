//! The TOUGH phrase catalog.
//!
//! Every keyword of the language is a Japanese catch-phrase. The constants
//! here are the single source of truth for the line matchers, the expression
//! sub-lexer, and the tests. Full-width punctuation inside a phrase is part
//! of the phrase and must match verbatim.

/// Program opening bookend, first half: `我が名は`. Followed by one or more
/// spaces and [`PROGRAM_START_TAIL`].
pub const PROGRAM_START_HEAD: &str = "我が名は";

/// Program opening bookend, second half: `尊鷹`.
pub const PROGRAM_START_TAIL: &str = "尊鷹";

/// Canonical text of the program opening bookend.
pub const PROGRAM_START: &str = "我が名は　尊鷹";

/// Program closing bookend (whole line).
pub const PROGRAM_END: &str = "逃げるんかいっ";

/// Throw statement, first half. Followed by one or more spaces and
/// [`THROW_TAIL`].
pub const THROW_HEAD: &str = "はっきり言ってそれって病気だから";

/// Throw statement, second half.
pub const THROW_TAIL: &str = "お前死ぬよ";

/// Canonical text of the throw statement.
pub const THROW: &str = "はっきり言ってそれって病気だから お前死ぬよ";

/// Comment marker closing the `（○○のコメント）` prefix.
pub const COMMENT_MARK: &str = "のコメント）";

/// Declare pair, suffix after the second name: `が正体を現すぞ`.
pub const DECLARE_REVEAL: &str = "が正体を現すぞ";

/// Declare pair, particle after the first name: `だ`.
pub const DECLARE_DA: char = 'だ';

/// Function header prefix.
pub const FN_PREFIX: &str = "自分たちの手で作るから尊いんだ";

/// Function name separator.
pub const FN_GA: char = 'が';

/// Function parameter-list terminator.
pub const FN_RUNDA: &str = "るんだ";

/// If header keyword.
pub const IF: &str = "なにっ";

/// Elif header keyword.
pub const ELIF: &str = "いやちょっとまてよ";

/// Canonical text of the else header.
pub const ELSE: &str = "う　あ　あ　あ　あ（ＰＣ書き文字）";

/// While header prefix. The quoted condition follows directly, no space.
pub const WHILE_HEAD: &str = "禁断の";

/// While header, suffix inside the quotes: `度打ち`.
pub const WHILE_TAIL: &str = "度打ち";

/// Catch header keyword.
pub const CATCH: &str = "はルールで禁止スよね";

/// Assignment keyword: `<expr> を継ぐ <name>`.
pub const ASSIGN_TSUGU: &str = "を継ぐ";

/// Print suffix keyword: `<expr> しゃあっ`.
pub const PRINT: &str = "しゃあっ";

/// Input suffix keyword: `<name> を教えてくれよ`.
pub const INPUT: &str = "を教えてくれよ";

/// Increment suffix keyword: `<name> 進化したと言うてくれや`.
pub const INCREMENT: &str = "進化したと言うてくれや";

/// Decrement suffix keyword: `<name> （哀）`.
pub const DECREMENT: &str = "（哀）";

/// Equality comparison phrase (==).
pub const EQ: &str = "ガチンコ";

/// Inequality comparison phrase (!=). Contains [`EQ`], so it must be tried
/// first.
pub const NEQ: &str = "ガチンコじゃない";

/// Greater-than comparison phrase (>).
pub const GT: &str = "を超えた";

/// Less-than comparison phrase (<).
pub const LT: &str = "に及ばない";

/// Opening string/while-condition delimiters the matchers accept.
pub const QUOTE_OPEN: [char; 4] = ['"', '“', '”', '「'];

/// Closing string/while-condition delimiters the matchers accept.
pub const QUOTE_CLOSE: [char; 4] = ['"', '“', '”', '」'];
