//! Verify Baseline Transcripts
//!
//! Grades every record that has a reference baseline and diffs the produced
//! transcript against it. Records are looked up as `<records_dir>/<file>.json`,
//! e.g. `design.xlsm.json`.
//!
//! Run with: cargo run --features cli --bin verify_baselines -- <baselines.json> <records_dir>

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Result};
use design_grader_rust::comparison::{render_mismatches, verify};
use design_grader_rust::{BaselineSet, RubricConfig, Workbook};
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "design_grader_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [baseline_path, records_dir] = args.as_slice() else {
        bail!("usage: verify_baselines <baselines.json> <records_dir>");
    };

    let rubric = match std::env::var("RUBRIC_PATH") {
        Ok(path) => RubricConfig::load(Path::new(&path))?,
        Err(_) => RubricConfig::default(),
    };
    let baselines = BaselineSet::load(Path::new(baseline_path))?;

    // Pair each baseline with its record
    let mut records = Vec::new();
    for baseline in baselines.iter() {
        let path: PathBuf = Path::new(records_dir).join(format!("{}.json", baseline.file));
        if !path.exists() {
            tracing::warn!("No record for baseline {} at {:?}", baseline.file, path);
            continue;
        }
        let mut workbook = Workbook::load(&path)?;
        if workbook.file_name.is_none() {
            workbook.file_name = Some(baseline.file.clone());
        }
        records.push(workbook);
    }

    let start = Instant::now();
    let outcomes: Vec<_> = records
        .par_iter()
        .map(|workbook| verify(workbook, &rubric, &baselines))
        .collect();
    tracing::info!("Verified {} records in {:.2?}", outcomes.len(), start.elapsed());

    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(verification) => {
                println!("{}", verification.outcome_text());
                if !verification.comparison.is_match() {
                    println!("{}", render_mismatches(&verification.comparison));
                    failed += 1;
                }
            }
            Err(err) => {
                println!("{}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} records did not match their baseline", failed, records.len());
    }
    Ok(())
}
