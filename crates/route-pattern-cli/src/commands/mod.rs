pub mod compile;
pub mod tokens;
