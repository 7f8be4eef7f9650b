//! depuml command-line interface.
//!
//! The CLI is trivial glue around the core pipeline: read one DOT file,
//! run the conversion, write one PlantUML document.

use std::time::Instant;

use tracing::info;

use depuml_error::{Error, Result};

/// Options for running depuml.
pub struct RunOptions {
    /// Path to the DOT file.
    pub file: String,
    /// Output file path; stdout when `None`.
    pub output: Option<String>,
}

/// Run the whole conversion: DOT text in, PlantUML text out.
pub fn run_main(opts: &RunOptions) -> Result<String> {
    let load_start = Instant::now();
    let data = std::fs::read_to_string(&opts.file)
        .map_err(|e| Error::from(e).with_context("path", opts.file.as_str()))?;
    let graph = depuml_dot::load(&data)?;
    info!(
        "Parsing & hierarchy: {:.2}s",
        load_start.elapsed().as_secs_f64()
    );

    let render_start = Instant::now();
    let uml = depuml_uml::render(&graph)?;
    info!(
        "Diagram rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(uml)
}
