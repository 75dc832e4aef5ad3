#[macro_use]
mod log;

#[macro_use]
mod fail;

pub use fail::*;
pub use log::*;
