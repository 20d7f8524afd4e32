pub mod ast;
pub mod err;
pub mod parser;
