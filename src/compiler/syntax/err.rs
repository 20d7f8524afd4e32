use thiserror::Error;

use crate::compiler::lexis::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("invalid token {0}")]
    InvalidToken(TokenKind),
    #[error("expected {0}, got end of input")]
    MissingToken(TokenKind),
    #[error("encountering unexpected end of input")]
    UnexpectedEof,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
    #[error("malformed {0} literal")]
    MalformedLiteral(TokenKind),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
}
