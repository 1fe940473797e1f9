//! Persistence boundary module

mod boundary;
mod store;

pub use boundary::*;
pub use store::*;
