//! Batch command implementation
//!
//! Reads one scale job per JSONL line, computes them in parallel, and
//! writes one result line per job in input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fluidscale_core::ScaleSpec;
use fluidscale_export::DEFAULT_NAMING_CONVENTION;
use fluidscale_input::CalculatorRequest;

use crate::cli::BatchArgs;

fn default_prefix() -> String {
    DEFAULT_NAMING_CONVENTION.to_string()
}

/// One JSONL job; missing fields fall back to their defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJob {
    /// Echoed back in the result; any JSON value
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub spec: ScaleSpec,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub include_fallbacks: bool,
}

impl BatchJob {
    pub fn into_request(self) -> CalculatorRequest {
        CalculatorRequest {
            spec: self.spec,
            naming_convention: self.prefix,
            include_fallbacks: self.include_fallbacks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Error,
}

/// Result of a single job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Job ID (matches input, `null` when it could not be read)
    pub id: Value,
    pub status: JobStatus,
    /// Stylesheet (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    /// Error message (only present on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobResult {
    fn success(id: Value, css: String) -> Self {
        Self {
            id,
            status: JobStatus::Success,
            css: Some(css),
            error: None,
        }
    }

    fn error(id: Value, error: String) -> Self {
        Self {
            id,
            status: JobStatus::Error,
            css: None,
            error: Some(error),
        }
    }
}

/// Run one line; malformed input becomes an error result
pub fn process_line(line_number: usize, line: &str) -> JobResult {
    let job: BatchJob = match serde_json::from_str(line) {
        Ok(job) => job,
        Err(e) => {
            // Salvage the id when the line is JSON of the wrong shape
            let id = serde_json::from_str::<Value>(line)
                .ok()
                .and_then(|value| value.get("id").cloned())
                .unwrap_or(Value::Null);
            return JobResult::error(id, format!("Line {line_number}: {e}"));
        }
    };

    let id = job.id.clone();
    match job.into_request().to_css() {
        Ok(css) => JobResult::success(id, css),
        Err(e) => {
            log::debug!("Job {id} on line {line_number} failed: {e}");
            JobResult::error(id, e.to_string())
        }
    }
}

/// Process numbered lines in parallel, keeping their order
pub fn process_lines(lines: &[(usize, String)]) -> Vec<JobResult> {
    lines
        .par_iter()
        .map(|(line_number, line)| process_line(*line_number, line))
        .collect()
}

pub fn run(args: &BatchArgs, quiet: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => {
            if !quiet {
                eprintln!("Reading jobs from stdin...");
            }
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read job input")?;
        if !line.trim().is_empty() {
            lines.push((index + 1, line));
        }
    }

    let results = process_lines(&lines);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for result in &results {
        serde_json::to_writer(&mut writer, result)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let failed = results
        .iter()
        .filter(|result| result.status == JobStatus::Error)
        .count();
    if !quiet {
        eprintln!(
            "Processed {} jobs: {} succeeded, {} failed",
            results.len(),
            results.len() - failed,
            failed
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_defaults() {
        let job: BatchJob = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(job.id, json!("a"));
        assert_eq!(job.spec, ScaleSpec::default());
        assert_eq!(job.prefix, "font-size");
        assert!(!job.include_fallbacks);
    }

    #[test]
    fn test_successful_job() {
        let result = process_line(
            1,
            r#"{"id":7,"spec":{"unit":"px","steps":["body","h1"],"baseStep":"body"},"prefix":"fs"}"#,
        );
        assert_eq!(result.status, JobStatus::Success);
        assert_eq!(result.id, json!(7));
        let css = result.css.unwrap();
        assert!(css.starts_with("--fs-body: clamp(16.00px, calc(14.6364px + 0.3409vw), 19.00px);"));
        assert!(css.contains("--fs-h1: clamp("));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_invalid_spec_is_reported() {
        let result = process_line(1, r#"{"id":"x","spec":{"steps":[]}}"#);
        assert_eq!(result.status, JobStatus::Error);
        assert_eq!(result.id, json!("x"));
        assert!(result.css.is_none());
        assert!(result.error.is_some());
    }

    #[test]
    fn test_malformed_lines_do_not_abort() {
        let lines = vec![
            (1, r#"{"id":"a"}"#.to_string()),
            (2, "not json".to_string()),
            (3, r#"{"id":"c","spec":{"minFontSizePx":"big"}}"#.to_string()),
            (4, r#"{"id":"d","prefix":"bad prefix"}"#.to_string()),
            (5, r#"{"id":"e"}"#.to_string()),
        ];
        let results = process_lines(&lines);
        let statuses: Vec<JobStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [
                JobStatus::Success,
                JobStatus::Error,
                JobStatus::Error,
                JobStatus::Error,
                JobStatus::Success
            ]
        );
        assert_eq!(results[1].id, Value::Null);
        assert!(results[1].error.as_deref().unwrap().starts_with("Line 2:"));
        assert_eq!(results[2].id, json!("c"));
        assert_eq!(results[4].id, json!("e"));
    }

    #[test]
    fn test_result_serialization_skips_absent_fields() {
        let line = serde_json::to_string(&JobResult::error(json!("z"), "boom".into())).unwrap();
        assert_eq!(line, r#"{"id":"z","status":"error","error":"boom"}"#);
    }
}
