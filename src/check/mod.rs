//! Skill check module

mod party;
mod resolver;
mod roller;


pub use party::*;
pub use resolver::*;
pub use roller::*;
