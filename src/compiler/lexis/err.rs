use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("could not match token for input {0:?}")]
    UnmatchedInput(String),
    #[error("encountering illegal number literal: {0}")]
    IllegalNumberLiteral(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("lex error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
}
