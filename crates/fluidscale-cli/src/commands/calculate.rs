//! Calculate command implementation
//!
//! Computes the scale and writes CSS or JSON to stdout or a file.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use fluidscale_export::exporter_for;

use super::resolve_request;
use crate::cli::CalculateArgs;

pub fn run(args: &CalculateArgs) -> Result<()> {
    let request = resolve_request(&args.scale)?;
    let scale = request.compute()?;

    let css = request.css_exporter()?.with_indent(args.indent);
    let exporter = exporter_for(args.format.into(), css, args.pretty);
    let output = exporter.export(&scale)?;

    match &args.output_file {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!(
                "Wrote {} steps as {} to {}",
                scale.len(),
                exporter.name(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&output).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
