//! Grade Design Records
//!
//! Grades one or more design records and prints their transcripts, or the
//! full score results as JSON with `--json`. RUBRIC_PATH selects a rubric
//! override file; the built-in rubric is used otherwise.
//!
//! Run with: cargo run --features cli --bin grade_record -- <record.json>... [--json]

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use design_grader_rust::{DesignScorer, RubricConfig, Workbook};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "design_grader_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut as_json = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if paths.is_empty() {
        bail!("usage: grade_record <record.json>... [--json]");
    }

    let rubric = match std::env::var("RUBRIC_PATH") {
        Ok(path) => {
            tracing::info!("Loading rubric: {}", path);
            RubricConfig::load(Path::new(&path))?
        }
        Err(_) => RubricConfig::default(),
    };
    tracing::info!("Rubric version: {}", rubric.version_label);

    let scorer = DesignScorer::new(rubric);
    for path in &paths {
        let workbook = Workbook::load(path)?;
        let result = scorer.score(&workbook);

        if as_json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", result.feedback_log);
            println!();
        }
        tracing::info!("{:?}: {:.1} / {:.0}", path, result.score, result.max_score);
    }

    Ok(())
}
