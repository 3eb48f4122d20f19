mod core;
mod flag;
mod name;
mod positional;
mod standard;
mod verb;

pub use self::core::*;
pub use flag::*;
pub use name::*;
pub use positional::*;
pub use standard::*;
pub use verb::*;
