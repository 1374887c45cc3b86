//! Preview command implementation
//!
//! Tabulates each step's bounds and its rendered size at chosen viewport
//! widths, the numbers a live preview would show.

use anyhow::{bail, Result};
use comfy_table::{Cell, CellAlignment, Table};

use fluidscale_core::{format::format_in_unit, TypeScale};

use super::resolve_request;
use crate::cli::PreviewArgs;
use crate::output::create_table;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let request = resolve_request(&args.scale)?;
    let scale = request.compute()?;
    let widths = preview_widths(&scale, &args.width)?;

    println!("{}", preview_table(&scale, &widths));
    Ok(())
}

/// Requested widths, or the midpoint of the scaling range
fn preview_widths(scale: &TypeScale, requested: &[f64]) -> Result<Vec<f64>> {
    if let Some(bad) = requested.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        bail!("Invalid --width {bad}: must be a positive number of pixels");
    }
    if requested.is_empty() {
        let midpoint = (scale.min_screen_width_px() + scale.max_screen_width_px()) / 2.0;
        return Ok(vec![midpoint]);
    }
    Ok(requested.to_vec())
}

pub fn preview_table(scale: &TypeScale, widths: &[f64]) -> Table {
    let decimals = scale.rounding_decimal_places();
    let unit = scale.unit();

    let mut header = vec![Cell::new("Step"), Cell::new("Min"), Cell::new("Max")];
    header.extend(widths.iter().map(|w| Cell::new(format!("Rendered @ {w}px"))));

    let mut table = create_table();
    table.set_header(header);
    for step in scale {
        let mut row = vec![
            Cell::new(step.step()),
            Cell::new(step.min()).set_alignment(CellAlignment::Right),
            Cell::new(step.max()).set_alignment(CellAlignment::Right),
        ];
        row.extend(widths.iter().map(|&width| {
            let size = step.font_size_at_screen_width(width);
            Cell::new(format_in_unit(size, decimals, unit)).set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidscale_core::{compute, ScaleSpec, Unit};

    fn px_scale() -> TypeScale {
        compute(&ScaleSpec {
            unit: Unit::Px,
            ..ScaleSpec::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_width_is_midpoint() {
        assert_eq!(preview_widths(&px_scale(), &[]).unwrap(), [840.0]);
        assert!(preview_widths(&px_scale(), &[0.0]).is_err());
    }

    #[test]
    fn test_table_contents() {
        let rendered = preview_table(&px_scale(), &[400.0, 840.0]).to_string();
        assert!(rendered.contains("Rendered @ 840px"));
        assert!(rendered.contains("16.00px"));
        assert!(rendered.contains("19.00px"));
        assert!(rendered.contains("20.00px"));
    }
}
