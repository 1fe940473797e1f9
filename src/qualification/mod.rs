//! Class qualification module

mod checker;

pub use checker::*;
