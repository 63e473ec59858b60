//! Operations invoked by commands.
//!
//! Each op does the actual work and returns a report; rendering stays in the
//! command layer.

mod check;
mod generate;

pub use check::check;
pub use generate::generate;
