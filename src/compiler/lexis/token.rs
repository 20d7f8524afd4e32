use std::fmt::{self, Display};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    String,
    Number,

    True,
    False,
    If,
    While,
    End,
    And,
    Or,

    ParensOpen,
    ParensClose,
    Comma,
    Equal,
    #[serde(rename = "EQUALEQUAL")]
    EqualEqual,
    Newline,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::While => "WHILE",
            TokenKind::End => "END",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::ParensOpen => "PARENS_OPEN",
            TokenKind::ParensClose => "PARENS_CLOSE",
            TokenKind::Comma => "COMMA",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUALEQUAL",
            TokenKind::Newline => "NEWLINE",
        };
        write!(f, "{s}")
    }
}

/// Whether `kind` is any of `kinds`.
#[must_use]
pub fn is_one_of(kind: TokenKind, kinds: &[TokenKind]) -> bool {
    kinds.contains(&kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(x) => write!(f, "{x}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Text(String),
    Number(Number),
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(text) => write!(f, "{text}"),
            Literal::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Literal,
}

impl Token {
    #[must_use]
    pub fn text(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            value: Literal::Text(text.to_string()),
        }
    }

    #[must_use]
    pub fn number(number: Number) -> Token {
        Token {
            kind: TokenKind::Number,
            value: Literal::Number(number),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Token { kind, value } = self;
        match kind {
            TokenKind::String => write!(f, "{kind} \"{value}\""),
            TokenKind::Newline => write!(f, "{kind}"),
            _ => write!(f, "{kind} {value}"),
        }
    }
}
