//! `mdpress render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mdpress_renderer::render_document;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup file to convert.
    input: PathBuf,

    /// Write the HTML page here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = std::fs::read_to_string(&self.input)?;
        let html = render_document(&text);

        match self.output {
            Some(path) => {
                std::fs::write(&path, html)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
