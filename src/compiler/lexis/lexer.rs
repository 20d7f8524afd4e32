use tracing::{debug, trace};

use crate::CompileResult;

use super::err::{LexError, LexErrorKind};
use super::pattern::{Filter, IGNORED, SIGNIFICANT};
use super::text::Reader;
use super::token::{Literal, Number, Token, TokenKind};

pub struct Lexer<'a> {
    reader: Reader<'a>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(code: &'a str) -> Lexer<'a> {
        Lexer {
            reader: Reader::new(code),
        }
    }

    /// Consumes the whole code, or fails on the first position no pattern
    /// matches.
    ///
    /// # Errors
    pub fn tokenize(mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while !self.reader.is_exhausted() {
            if let Some(token) = self.digest_token()? {
                trace!(%token, "digested token");
                tokens.push(token);
            }
        }
        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn digest_token(&mut self) -> CompileResult<Option<Token>> {
        let rest = self.reader.rest();
        for pattern in SIGNIFICANT.iter() {
            if let Some(text) = pattern.matches(rest) {
                let token = Lexer::filter(pattern.tag, pattern.filter, text)?;
                self.reader.forward(text.len());
                return Ok(Some(token));
            }
        }
        for pattern in IGNORED.iter() {
            if let Some(text) = pattern.matches(rest) {
                trace!(ignored = ?pattern.tag, "skipped");
                self.reader.forward(text.len());
                return Ok(None);
            }
        }
        debug!(remainder = rest, "no token pattern matches");
        Err(LexError {
            kind: LexErrorKind::UnmatchedInput(rest.to_string()),
        }
        .into())
    }

    fn filter(kind: TokenKind, filter: Filter, text: &str) -> CompileResult<Token> {
        let value = match filter {
            Filter::Verbatim => Literal::Text(text.to_string()),
            // the pattern guarantees an opening and a closing quote
            Filter::Unquote => Literal::Text(text[1..text.len() - 1].to_string()),
            Filter::Numeric => Literal::Number(Lexer::digest_number(text)?),
        };
        Ok(Token { kind, value })
    }

    /// Integers too wide for `i64` widen to floats. Only a literal beyond
    /// the `f64` range is rejected.
    fn digest_number(text: &str) -> CompileResult<Number> {
        if !text.contains('.') {
            if let Ok(x) = text.parse::<i64>() {
                return Ok(Number::Integer(x));
            }
        }
        let number = text
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map(Number::Float);
        number.ok_or_else(|| {
            debug!(text, "number literal out of range");
            LexError {
                kind: LexErrorKind::IllegalNumberLiteral(text.to_string()),
            }
            .into()
        })
    }
}
