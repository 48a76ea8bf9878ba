pub mod ast;
pub mod check;
pub mod fmt;
pub mod input;
pub mod tokens;
