//! Report data structures for commands.
//!
//! Commands build reports from op results, then render them to an Output
//! target; data collection stays separate from rendering.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
