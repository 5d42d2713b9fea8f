use crate::scope::line_comment_start;

/// Whitespace-delimited view of the text left of a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContext {
    /// Token the cursor is in, up to the cursor.
    pub token: String,
    /// Character column where `token` starts.
    pub token_start: usize,
    /// Tokens before `token` on the same line, in order.
    pub preceding_tokens: Vec<String>,
    /// Character immediately before the cursor.
    pub trigger: Option<char>,
}

impl TokenContext {
    pub fn last_preceding(&self) -> Option<&str> {
        self.preceding_tokens.last().map(String::as_str)
    }
}

/// A word under a column, expanded left and right to the nearest whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

pub fn word_at(
    line: &str,
    column: usize,
) -> Option<Word> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());

    let mut start = column;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    let mut end = column;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    if start == end {
        return None;
    }
    Some(Word {
        text: chars[start..end].iter().collect(),
        start,
        end,
    })
}

/// Identifier under a column, the way hover and definition want it: word
/// characters and `.` for qualified names. A leading `@` is dropped.
pub fn identifier_at(
    line: &str,
    column: usize,
) -> Option<Word> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '.' || c == '$' || c == '%' || c == '#';

    let mut start = column;
    while start > 0 && is_ident(chars[start - 1]) {
        start -= 1;
    }
    let mut end = column;
    while end < chars.len() && is_ident(chars[end]) {
        end += 1;
    }
    while start < end && chars[start] == '.' && chars.get(start + 1).is_none_or(|c| !c.is_alphabetic()) {
        start += 1;
    }
    while end > start && chars[end - 1] == '.' {
        end -= 1;
    }
    if start == end {
        return None;
    }
    Some(Word {
        text: chars[start..end].iter().collect(),
        start,
        end,
    })
}

/// Split the text left of `cursor` into the current token and the tokens
/// before it. Returns `None` inside a comment or string literal.
pub fn resolve_context(
    line: &str,
    cursor: usize,
) -> Option<TokenContext> {
    let chars: Vec<char> = line.chars().collect();
    let cursor = cursor.min(chars.len());
    let left: String = chars[..cursor].iter().collect();

    if line_comment_start(&left).is_some() || in_string(&left) {
        return None;
    }
    if let Some(word) = word_at(line, cursor)
        && (is_quote(word.text.chars().next()) || is_quote(word.text.chars().last()))
    {
        return None;
    }

    let token_start = chars[..cursor].iter().rposition(|c| c.is_whitespace()).map(|i| i + 1).unwrap_or(0);
    let token: String = chars[token_start..cursor].iter().collect();
    let preceding_tokens = chars[..token_start].iter().collect::<String>().split_whitespace().map(str::to_string).collect();

    Some(TokenContext {
        token,
        token_start,
        preceding_tokens,
        trigger: cursor.checked_sub(1).map(|i| chars[i]),
    })
}

fn is_quote(c: Option<char>) -> bool {
    matches!(c, Some('"') | Some('\''))
}

fn in_string(text: &str) -> bool {
    let mut open = false;
    let mut escaped = false;
    for c in text.chars() {
        match c {
            '\\' if open && !escaped => {
                escaped = true;
                continue;
            }
            '"' if !escaped => open = !open,
            _ => {}
        }
        escaped = false;
    }
    open
}
