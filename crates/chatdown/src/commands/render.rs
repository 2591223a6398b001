//! `chatdown render` command implementation.

use std::io::Read;
use std::path::PathBuf;

use chatdown_render::Renderer;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Which display policy to apply to the input.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum RoleArg {
    /// Render markup (assistant-authored content).
    Assistant,
    /// Escape only, no markup interpretation (user-authored content).
    User,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: stdin).
    file: Option<PathBuf>,

    /// Author role of the content. User content is never interpreted as markup.
    #[arg(long, value_enum, default_value = "assistant")]
    role: RoleArg,

    /// Maximum input length in bytes (overrides the default cap).
    #[arg(long)]
    max_len: Option<usize>,

    /// Emit a JSON report with html and warnings instead of raw HTML.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Report shape for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    html: &'a str,
    warnings: &'a [String],
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or exceeds the
    /// configured length cap.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let raw = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut renderer = Renderer::new();
        if let Some(max) = self.max_len {
            renderer = renderer.with_max_input_len(max);
        }

        let (html, warnings) = match self.role {
            RoleArg::Assistant => {
                let result = renderer.render(&raw)?;
                (result.html, result.warnings)
            }
            RoleArg::User => (renderer.render_plain(&raw)?, Vec::new()),
        };

        if self.json {
            let report = Report {
                html: &html,
                warnings: &warnings,
            };
            output.result(&serde_json::to_string(&report)?);
        } else {
            for warning in &warnings {
                output.warning(&format!("Warning: {warning}"));
            }
            output.result(&html);
        }

        Ok(())
    }
}
