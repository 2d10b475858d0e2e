//! CLI logic for the xmigraph tool.
//!
//! This module reads an XMI document, runs it through the xmigraph
//! pipeline and writes the configured report.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write as _};

use log::info;

use xmigraph::{Pipeline, XmiGraphError};

/// Run the xmigraph CLI application
///
/// Parses the input document and writes the report to the output file, or
/// to stdout when no output path is given.
///
/// # Errors
///
/// Returns `XmiGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Report encoding errors
pub fn run(args: &Args) -> Result<(), XmiGraphError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let pipeline = Pipeline::new(app_config);
    let model = pipeline.parse(&source)?;
    let report = pipeline.report(&model)?;

    match &args.output {
        Some(output) => {
            fs::write(output, report)?;
            info!(output_file = output; "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
