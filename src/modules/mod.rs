pub mod eval;
pub mod export;
pub mod fit;
pub mod parse;
pub mod protocol;
