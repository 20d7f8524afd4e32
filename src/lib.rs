use compiler::err::CompileError;
use compiler::lexis::lexer::Lexer;
use compiler::lexis::token::Token;
use compiler::syntax::ast::statement::Statement;
use compiler::syntax::parser::Parser;

pub mod compiler;
pub mod constants;
pub mod util;

pub type CompileResult<T> = Result<T, CompileError>;

/// # Errors
pub fn tokenize(code: &str) -> CompileResult<Vec<Token>> {
    Lexer::new(code).tokenize()
}

/// # Errors
pub fn parse(tokens: Vec<Token>) -> CompileResult<Vec<Statement>> {
    Parser::new(tokens).parse_program()
}

/// # Errors
pub fn syntax_analyze(code: &str) -> CompileResult<Vec<Statement>> {
    let tokens = tokenize(code)?;
    parse(tokens)
}
