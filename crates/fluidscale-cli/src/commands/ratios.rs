//! Ratios command implementation
//!
//! Lists the named modular ratios accepted by `--min-ratio` and `--max-ratio`.

use anyhow::Result;
use serde::Serialize;

use fluidscale_core::ModularRatio;

use crate::cli::RatiosArgs;
use crate::output::create_table;

#[derive(Debug, Serialize)]
struct RatioEntry {
    id: &'static str,
    name: &'static str,
    value: f64,
}

fn entries() -> Vec<RatioEntry> {
    ModularRatio::ALL
        .iter()
        .map(|ratio| RatioEntry {
            id: ratio.id(),
            name: ratio.name(),
            value: ratio.value(),
        })
        .collect()
}

pub fn run(args: &RatiosArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries())?);
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["Id", "Name", "Ratio"]);
    for entry in entries() {
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.to_string(),
            entry.value.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_ratio() {
        let entries = entries();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].id, "minor-second");
        assert_eq!(entries[7].value, 1.618);
    }
}
