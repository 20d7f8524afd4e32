use tracing::{debug, trace};

use crate::compiler::{
    err::CompileError,
    lexis::token::{is_one_of, Literal, Token, TokenKind},
};
use crate::constants::common::MAX_NESTING_DEPTH;
use crate::CompileResult;

use super::{
    ast::{
        crumb::Identifier,
        expression::{BinaryOperation, Expression, FunctionCall},
        operator::Binary,
        statement::{AssignmentDetail, IfDetail, Statement, WhileDetail},
    },
    err::{ParseError, ParseErrorKind},
};

const CONNECTIVES: [TokenKind; 2] = [TokenKind::And, TokenKind::Or];

/// Recursive-descent parser over an owned token sequence. Tokens are consumed
/// front to back through a cursor; at most two of them are looked at before
/// a branch is chosen.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parses every remaining token into top-level statements.
    ///
    /// # Errors
    /// Fails on the first token that does not fit the grammar.
    pub fn parse_program(mut self) -> CompileResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.is_exhausted() {
            statements.push(self.parse_statement()?);
        }
        debug!(count = statements.len(), "parsed program");
        Ok(statements)
    }

    fn error(kind: ParseErrorKind) -> CompileError {
        debug!(%kind, "parse failed");
        ParseError { kind }.into()
    }

    fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn peek(&self) -> CompileResult<&Token> {
        self.tokens
            .get(self.position)
            .ok_or_else(|| Parser::error(ParseErrorKind::UnexpectedEof))
    }

    fn peek_second(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    fn match_kind(&self, expected: TokenKind) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|token| token.kind == expected)
    }

    fn expect(&mut self, expected: TokenKind) -> bool {
        let matched = self.match_kind(expected);
        if matched {
            self.position += 1;
        }
        matched
    }

    /// The front token, checked against `expected` but left in place.
    fn peek_expecting(&self, expected: TokenKind) -> CompileResult<&Token> {
        let Some(token) = self.tokens.get(self.position) else {
            return Err(Parser::error(ParseErrorKind::MissingToken(expected)));
        };
        if token.kind != expected {
            return Err(Parser::error(ParseErrorKind::UnexpectedToken {
                expected,
                found: token.kind,
            }));
        }
        Ok(token)
    }

    fn pop(&mut self, expected: TokenKind) -> CompileResult<Token> {
        let token = self.peek_expecting(expected)?.clone();
        self.position += 1;
        Ok(token)
    }

    fn at_binary_operation(&self) -> bool {
        self.match_kind(TokenKind::Identifier)
            && self
                .peek_second()
                .is_some_and(|token| is_one_of(token.kind, &CONNECTIVES))
    }

    /// Every nested expression, operator and block counts one level; the
    /// tree is rejected before it grows deep enough to exhaust the stack.
    fn descend(&mut self) -> CompileResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Parser::error(ParseErrorKind::TooDeep(MAX_NESTING_DEPTH)));
        }
        Ok(())
    }

    fn skip_newlines(&mut self) {
        while self.expect(TokenKind::Newline) {}
    }

    fn parse_identifier(&mut self) -> CompileResult<Identifier> {
        match self.pop(TokenKind::Identifier)?.value {
            Literal::Text(name) => Ok(Identifier(name)),
            Literal::Number(_) => Err(Parser::error(ParseErrorKind::MalformedLiteral(
                TokenKind::Identifier,
            ))),
        }
    }

    fn parse_string(&mut self) -> CompileResult<Expression> {
        match self.pop(TokenKind::String)?.value {
            Literal::Text(literal) => Ok(Expression::StringLiteral(literal)),
            Literal::Number(_) => Err(Parser::error(ParseErrorKind::MalformedLiteral(
                TokenKind::String,
            ))),
        }
    }

    fn parse_number(&mut self) -> CompileResult<Expression> {
        match self.pop(TokenKind::Number)?.value {
            Literal::Number(literal) => Ok(Expression::NumberLiteral(literal)),
            Literal::Text(_) => Err(Parser::error(ParseErrorKind::MalformedLiteral(
                TokenKind::Number,
            ))),
        }
    }

    /// Only called with `TRUE` or `FALSE` in front.
    fn parse_boolean(&mut self) -> Expression {
        let literal = self.match_kind(TokenKind::True);
        self.position += 1;
        Expression::BooleanLiteral(literal)
    }

    fn parse_function_call_args(&mut self) -> CompileResult<Vec<Expression>> {
        self.pop(TokenKind::ParensOpen)?;
        if self.expect(TokenKind::ParensClose) {
            return Ok(Vec::new());
        }
        let mut args = Vec::<Expression>::new();
        loop {
            let arg = self.parse_expression()?;
            args.push(arg);
            if !self.expect(TokenKind::Comma) {
                break;
            }
        }
        self.pop(TokenKind::ParensClose)?;
        Ok(args)
    }

    fn parse_function_call(&mut self) -> CompileResult<FunctionCall> {
        let name = self.parse_identifier()?;
        let arguments = self.parse_function_call_args()?;
        Ok(FunctionCall { name, arguments })
    }

    /// A run of `identifier (and|or)` prefixes is collected first and then
    /// folded from the right, so every chain nests on the right side while
    /// `left` stays a bare identifier.
    fn parse_binary_operation(&mut self) -> CompileResult<Expression> {
        let mut chain = Vec::<(Identifier, Binary)>::new();
        loop {
            let left = self.parse_identifier()?;
            let kind = self.peek()?.kind;
            let Some(operator) = Binary::of(kind) else {
                return Err(Parser::error(ParseErrorKind::InvalidToken(kind)));
            };
            self.position += 1;
            self.descend()?;
            chain.push((left, operator));
            if !self.at_binary_operation() {
                break;
            }
        }
        let rightmost = self.parse_expression()?;
        self.depth -= chain.len();
        let expression = chain
            .into_iter()
            .rev()
            .fold(rightmost, |right, (left, operator)| {
                Expression::BinaryOperation(BinaryOperation {
                    operator,
                    left: Box::new(Expression::Identifier(left)),
                    right: Box::new(right),
                })
            });
        Ok(expression)
    }

    fn parse_expression(&mut self) -> CompileResult<Expression> {
        self.descend()?;
        let expression = self.parse_operand()?;
        self.depth -= 1;
        Ok(expression)
    }

    fn parse_operand(&mut self) -> CompileResult<Expression> {
        let kind = self.peek()?.kind;
        match kind {
            TokenKind::String => self.parse_string(),
            TokenKind::Number => self.parse_number(),
            TokenKind::True | TokenKind::False => Ok(self.parse_boolean()),
            TokenKind::Identifier => {
                if self
                    .peek_second()
                    .is_some_and(|token| token.kind == TokenKind::ParensOpen)
                {
                    Ok(Expression::FunctionCall(self.parse_function_call()?))
                } else if self.at_binary_operation() {
                    self.parse_binary_operation()
                } else {
                    Ok(Expression::Identifier(self.parse_identifier()?))
                }
            }
            kind @ (TokenKind::If
            | TokenKind::While
            | TokenKind::End
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::ParensOpen
            | TokenKind::ParensClose
            | TokenKind::Comma
            | TokenKind::Equal
            | TokenKind::EqualEqual
            | TokenKind::Newline) => Err(Parser::error(ParseErrorKind::InvalidToken(kind))),
        }
    }

    /// Statements up to the closing `end`, which is consumed.
    fn parse_block(&mut self) -> CompileResult<Vec<Statement>> {
        self.descend()?;
        self.skip_newlines();
        let mut body = Vec::<Statement>::new();
        while !self.expect(TokenKind::End) {
            if self.is_exhausted() {
                return Err(Parser::error(ParseErrorKind::MissingToken(TokenKind::End)));
            }
            body.push(self.parse_statement()?);
        }
        self.depth -= 1;
        Ok(body)
    }

    fn parse_if_statement(&mut self) -> CompileResult<IfDetail> {
        self.pop(TokenKind::If)?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        Ok(IfDetail { condition, body })
    }

    fn parse_while_statement(&mut self) -> CompileResult<WhileDetail> {
        self.pop(TokenKind::While)?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        Ok(WhileDetail { condition, body })
    }

    fn parse_assignment(&mut self) -> CompileResult<AssignmentDetail> {
        let target = self.parse_identifier()?;
        self.pop(TokenKind::Equal)?;
        let value = self.parse_expression()?;
        Ok(AssignmentDetail { target, value })
    }

    fn parse_statement(&mut self) -> CompileResult<Statement> {
        let kind = self.peek()?.kind;
        trace!(%kind, "parsing statement");
        let statement = match kind {
            TokenKind::If => Statement::If(self.parse_if_statement()?),
            TokenKind::While => Statement::While(self.parse_while_statement()?),
            TokenKind::Identifier => {
                if self
                    .peek_second()
                    .is_some_and(|token| token.kind == TokenKind::ParensOpen)
                {
                    Statement::FunctionCall(self.parse_function_call()?)
                } else {
                    Statement::Assignment(self.parse_assignment()?)
                }
            }
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::End
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::ParensOpen
            | TokenKind::ParensClose
            | TokenKind::Comma
            | TokenKind::Equal
            | TokenKind::EqualEqual
            | TokenKind::Newline => {
                return Err(Parser::error(ParseErrorKind::InvalidToken(kind)));
            }
        };
        self.skip_newlines();
        Ok(statement)
    }
}
