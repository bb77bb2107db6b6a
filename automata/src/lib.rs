
pub mod ids;
pub mod lexer;
pub mod parser;
