use std::path::PathBuf;

use apiforge_document::Document;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the input schema document
    #[arg(short, long)]
    pub input_spec: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let document = Document::from_file(&self.input_spec).unwrap_or_exit();

        let report = ops::check(&document, &self.input_spec)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
