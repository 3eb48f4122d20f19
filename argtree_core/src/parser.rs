mod base;
mod collection;
pub mod grammar;
mod interface;
mod middleware;
mod printer;
mod tree;

pub use base::*;
pub use collection::*;
pub use interface::*;
pub use middleware::*;
pub use printer::*;
pub use tree::*;
