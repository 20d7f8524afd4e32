use std::fmt::{self, Display};

use serde::Serialize;

use crate::compiler::lexis::token::Number;
use crate::util::pretty_format::{indent, PrettyFormat};

use super::{crumb::Identifier, operator::Binary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: Identifier,
    pub arguments: Vec<Expression>,
}

/// `left` is always a bare identifier; chains nest on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOperation {
    pub operator: Binary,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Identifier(Identifier),

    StringLiteral(String),
    NumberLiteral(Number),
    BooleanLiteral(bool),

    FunctionCall(FunctionCall),
    BinaryOperation(BinaryOperation),
}

impl PrettyFormat for FunctionCall {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        let FunctionCall { name, arguments } = self;
        writeln!(f, "{indentation}Call {name}")?;
        arguments
            .iter()
            .try_for_each(|argument| argument.pretty_format(f, indentation_num + 1))
    }
}

impl PrettyFormat for Expression {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Expression::Identifier(identifier) => {
                writeln!(f, "{indentation}{identifier}")?;
            }
            Expression::StringLiteral(literal) => {
                writeln!(f, "{indentation}\"{literal}\"")?;
            }
            Expression::NumberLiteral(literal) => {
                writeln!(f, "{indentation}{literal}")?;
            }
            Expression::BooleanLiteral(literal) => {
                writeln!(f, "{indentation}{literal}")?;
            }
            Expression::FunctionCall(call) => {
                call.pretty_format(f, indentation_num)?;
            }
            Expression::BinaryOperation(BinaryOperation {
                operator,
                left,
                right,
            }) => {
                writeln!(f, "{indentation}{operator}")?;
                left.pretty_format(f, indentation_num + 1)?;
                right.pretty_format(f, indentation_num + 1)?;
            }
        }
        Ok(())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_format(f, 0)
    }
}
