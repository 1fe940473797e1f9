//! Engine module: action dispatch and derived views

mod dispatcher;
#[cfg(feature = "python")]
mod session;
mod sheet;


pub use dispatcher::*;
#[cfg(feature = "python")]
pub use session::*;
pub use sheet::*;
