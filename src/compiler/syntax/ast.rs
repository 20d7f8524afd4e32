pub mod crumb;
pub mod expression;
pub mod operator;
pub mod statement;
