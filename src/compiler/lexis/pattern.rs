use once_cell::sync::Lazy;
use regex::Regex;

use crate::sys_error;

use super::token::TokenKind;

/// How the matched text of a pattern becomes a token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Verbatim,
    Unquote,
    Numeric,
}

pub struct Pattern<T> {
    pub tag: T,
    pub filter: Filter,
    regex: Regex,
}

impl<T: Copy> Pattern<T> {
    fn new(tag: T, source: &str, filter: Filter) -> Pattern<T> {
        let regex = match Regex::new(source) {
            Ok(regex) => regex,
            Err(e) => sys_error!("malformed token pattern {source}: {e}"),
        };
        Pattern { tag, filter, regex }
    }

    /// The text this pattern matches at the very start of `input`, if any.
    pub fn matches<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex.find(input).map(|m| m.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Space,
    Tab,
    Return,
    Comment,
}

/// Tried in order; keywords come before identifiers and `==` before `=`.
pub static SIGNIFICANT: Lazy<Vec<Pattern<TokenKind>>> = Lazy::new(|| {
    [
        (TokenKind::While, r"^while\b", Filter::Verbatim),
        (TokenKind::If, r"^if\b", Filter::Verbatim),
        (TokenKind::End, r"^end\b", Filter::Verbatim),
        (TokenKind::True, r"^true\b", Filter::Verbatim),
        (TokenKind::False, r"^false\b", Filter::Verbatim),
        (TokenKind::And, r"^and\b", Filter::Verbatim),
        (TokenKind::Or, r"^or\b", Filter::Verbatim),
        (TokenKind::ParensOpen, r"^\(", Filter::Verbatim),
        (TokenKind::ParensClose, r"^\)", Filter::Verbatim),
        (TokenKind::Comma, r"^,", Filter::Verbatim),
        (TokenKind::String, r#"^"(?:[^"\\]|\\.)*""#, Filter::Unquote),
        (TokenKind::Number, r"^[0-9]+(?:\.[0-9]+)?", Filter::Numeric),
        (TokenKind::Identifier, r"^[A-Za-z][A-Za-z0-9_]*", Filter::Verbatim),
        (TokenKind::EqualEqual, r"^==", Filter::Verbatim),
        (TokenKind::Equal, r"^=", Filter::Verbatim),
        (TokenKind::Newline, r"^\n", Filter::Verbatim),
    ]
    .into_iter()
    .map(|(kind, source, filter)| Pattern::new(kind, source, filter))
    .collect()
});

pub static IGNORED: Lazy<Vec<Pattern<Ignored>>> = Lazy::new(|| {
    [
        (Ignored::Space, r"^ "),
        (Ignored::Tab, r"^\t"),
        (Ignored::Return, r"^\r"),
        (Ignored::Comment, r"^#[^\n]*"),
    ]
    .into_iter()
    .map(|(tag, source)| Pattern::new(tag, source, Filter::Verbatim))
    .collect()
});
