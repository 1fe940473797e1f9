//! Character roster module

mod snapshot;
mod state;

#[cfg(test)]
mod property_tests;

pub use snapshot::*;
pub use state::*;
