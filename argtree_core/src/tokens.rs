mod model;
mod tokenizer;

pub use model::*;
pub use tokenizer::*;
