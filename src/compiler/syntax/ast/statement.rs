use std::fmt::{self, Display};

use serde::Serialize;

use crate::util::pretty_format::{indent, PrettyFormat};

use super::{
    crumb::Identifier,
    expression::{Expression, FunctionCall},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentDetail {
    pub target: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfDetail {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileDetail {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Assignment(AssignmentDetail),
    FunctionCall(FunctionCall),
    If(IfDetail),
    While(WhileDetail),
}

fn pretty_format_block(
    f: &mut fmt::Formatter,
    indentation_num: usize,
    body: &[Statement],
) -> fmt::Result {
    body.iter()
        .try_for_each(|statement| statement.pretty_format(f, indentation_num))
}

impl PrettyFormat for Statement {
    fn pretty_format(&self, f: &mut fmt::Formatter, indentation_num: usize) -> fmt::Result {
        let indentation = indent(indentation_num);
        match self {
            Statement::Assignment(AssignmentDetail { target, value }) => {
                writeln!(f, "{indentation}Assign {target}")?;
                value.pretty_format(f, indentation_num + 1)?;
            }
            Statement::FunctionCall(call) => {
                call.pretty_format(f, indentation_num)?;
            }
            Statement::If(IfDetail { condition, body }) => {
                writeln!(f, "{indentation}If")?;
                condition.pretty_format(f, indentation_num + 1)?;
                writeln!(f, "{indentation}Then")?;
                pretty_format_block(f, indentation_num + 1, body)?;
            }
            Statement::While(WhileDetail { condition, body }) => {
                writeln!(f, "{indentation}While")?;
                condition.pretty_format(f, indentation_num + 1)?;
                writeln!(f, "{indentation}Do")?;
                pretty_format_block(f, indentation_num + 1, body)?;
            }
        };
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_format(f, 0)
    }
}
