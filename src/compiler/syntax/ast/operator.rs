use std::fmt::{self, Display};

use serde::Serialize;

use crate::compiler::lexis::token::TokenKind;

/// Boolean connectives. Both associate to the right and share one
/// precedence level, so `a and b or c` reads as `a and (b or c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Binary {
    And,
    Or,
}

impl Binary {
    #[must_use]
    pub fn of(kind: TokenKind) -> Option<Binary> {
        match kind {
            TokenKind::And => Some(Binary::And),
            TokenKind::Or => Some(Binary::Or),
            _ => None,
        }
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Binary::And => "And",
            Binary::Or => "Or",
        };
        write!(f, "{s}")
    }
}
