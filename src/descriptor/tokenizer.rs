//! Line tokenizer for the subset of the descriptor grammar the audit needs.
//!
//! Grammar, one construct per line:
//!
//! ```text
//! line       := blank | comment | header | assignment | other
//! comment    := '#' ...
//! header     := '[' name ']' | '[[' name ']]'
//! assignment := key '=' value
//! ```
//!
//! Everything that is not a header or an assignment is surfaced as
//! [`Token::Other`] and carries no meaning for the audit.

/// One meaningful line of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `[name]` (`array == false`) or `[[name]]` (`array == true`).
    Section { name: &'a str, array: bool },
    /// `key = value`, both trimmed. `value` is raw (quotes kept).
    Assignment { key: &'a str, value: &'a str },
    Other(&'a str),
}

impl Token<'_> {
    /// `[workspace]` exactly; `[workspace.dependencies]` and friends do not count.
    #[must_use]
    pub fn is_workspace_header(&self) -> bool {
        matches!(self, Token::Section { name: "workspace", array: false })
    }

    /// The unquoted value of a `name = "..."` assignment.
    #[must_use]
    pub fn name_value(&self) -> Option<String> {
        match self {
            Token::Assignment { key: "name", value } => Some(unquote(value)),
            _ => None,
        }
    }
}

/// Tokenize `content` lazily, skipping blank and comment lines.
pub fn tokenize(content: &str) -> impl Iterator<Item = Token<'_>> {
    content.lines().filter_map(tokenize_line)
}

fn tokenize_line(line: &str) -> Option<Token<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    if trimmed.starts_with('[') {
        return Some(parse_header(trimmed).unwrap_or(Token::Other(trimmed)));
    }

    if let Some((key, value)) = trimmed.split_once('=') {
        let key = key.trim();
        if is_key(key) {
            return Some(Token::Assignment {
                key,
                value: value.trim(),
            });
        }
    }

    Some(Token::Other(trimmed))
}

fn parse_header(line: &str) -> Option<Token<'_>> {
    let line = strip_trailing_comment(line);
    if let Some(inner) = line.strip_prefix("[[").and_then(|l| l.strip_suffix("]]")) {
        return Some(Token::Section {
            name: inner.trim(),
            array: true,
        });
    }
    line.strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .map(|inner| Token::Section {
            name: inner.trim(),
            array: false,
        })
}

fn strip_trailing_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(head, _)| head).trim_end()
}

fn is_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if key.len() >= 2
        && ((key.starts_with('"') && key.ends_with('"'))
            || (key.starts_with('\'') && key.ends_with('\'')))
    {
        return true;
    }
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Strip one layer of quotes plus any trailing comment, then surrounding whitespace.
fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            let inner = rest.split_once(quote).map_or(rest, |(inner, _)| inner);
            return inner.trim().to_string();
        }
    }
    strip_trailing_comment(value).replace('"', "").trim().to_string()
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
