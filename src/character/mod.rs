//! Character state module

mod attributes;
mod state;


pub use attributes::*;
pub use state::*;
