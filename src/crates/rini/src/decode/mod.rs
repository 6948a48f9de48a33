//! INI decoding module

pub mod classify;
pub mod parser;
pub mod scanner;

pub use classify::*;
pub use parser::*;
pub use scanner::*;
