//! Job pipeline — wires config, input, validation, signal engine, and reporting.
//!
//! Stages advance strictly forward:
//! `Start → ConfigLoaded → InputLoaded → Validated → Computed → reported(success)`.
//! A failure at any stage goes straight to reported(error). Either way exactly
//! one record is written to the output path.
//!
//! Two entry points:
//! - `run_pipeline()`: computes metrics without touching the output file.
//! - `execute()`: runs the pipeline and writes the success or error record.

use log::{debug, error, info};
use std::fmt;
use std::path::{Path, PathBuf};

use rollsig_core::{
    compute_signals, validate, ConfigError, InputTable, JobConfig, RunRng, Window,
};

use crate::clock::Clock;
use crate::error::RunError;
use crate::metrics::MetricsRecord;
use crate::report::{write_record, ErrorRecord, OutputRecord};

/// File locations for one run.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// Last stage a run completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ConfigLoaded,
    InputLoaded,
    Validated,
    Computed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ConfigLoaded => "config loaded",
            Stage::InputLoaded => "input loaded",
            Stage::Validated => "validated",
            Stage::Computed => "computed",
        };
        f.write_str(name)
    }
}

/// A failed run: where it stopped, the version known at that point, and why.
#[derive(Debug)]
pub struct RunFailure {
    pub stage: Stage,
    pub version: Option<String>,
    pub error: RunError,
}

impl RunFailure {
    pub fn new(stage: Stage, version: Option<String>, error: RunError) -> Self {
        Self {
            stage,
            version,
            error,
        }
    }

    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::new(self.version.as_deref(), self.error.to_string())
    }
}

/// Loaded config plus the generator seeded from it. Lives for one run.
#[derive(Debug, Clone)]
pub struct JobContext {
    config: JobConfig,
    rng: RunRng,
}

impl JobContext {
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let config = JobConfig::from_file(config_path)?;
        let rng = config.run_rng();
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn rng(&self) -> &RunRng {
        &self.rng
    }
}

/// Successful run: the input table with derived columns, and its metrics.
#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub context: JobContext,
    pub table: InputTable,
    pub metrics: MetricsRecord,
}

/// Run every stage up to metrics. Does not write output.
pub fn run_pipeline(paths: &JobPaths, clock: &dyn Clock) -> Result<CompletedRun, RunFailure> {
    info!("Job started");

    let context = JobContext::load(&paths.config)
        .map_err(|e| RunFailure::new(Stage::Start, None, e.into()))?;
    let config = context.config();
    info!(
        "Config loaded: seed={}, window={}, version={}",
        config.seed, config.window, config.version
    );

    let (table, metrics) = process(config, &paths.input, clock)
        .map_err(|(stage, e)| RunFailure::new(stage, Some(config.version.clone()), e))?;

    Ok(CompletedRun {
        context,
        table,
        metrics,
    })
}

fn process(
    config: &JobConfig,
    input: &Path,
    clock: &dyn Clock,
) -> Result<(InputTable, MetricsRecord), (Stage, RunError)> {
    let mut table =
        InputTable::from_csv_path(input).map_err(|e| (Stage::ConfigLoaded, RunError::from(e)))?;

    let close = validate(&table).map_err(|e| (Stage::InputLoaded, RunError::from(e)))?;
    info!("Data loaded: {} rows", table.n_rows());

    let window = Window::new(config.window).map_err(|e| (Stage::Validated, RunError::from(e)))?;
    let frame = compute_signals(&close, window);
    info!("Rolling mean calculated with window={}", window.get());
    info!("Signals generated");

    frame.attach_to(&mut table);
    let metrics = MetricsRecord::from_frame(config, &frame, clock);
    Ok((table, metrics))
}

/// Run the pipeline and write exactly one record to `paths.output`.
///
/// Returns the record that was reported. If writing the success record fails,
/// an error record is written in its place.
pub fn execute(paths: &JobPaths, clock: &dyn Clock) -> OutputRecord {
    let failure = match run_pipeline(paths, clock) {
        Ok(run) => {
            let metrics = run.metrics;
            let record = OutputRecord::Success(metrics.clone());
            match write_record(&paths.output, &record) {
                Ok(()) => {
                    info!(
                        "Metrics: signal_rate={}, rows_processed={}",
                        metrics.value, metrics.rows_processed
                    );
                    info!("Job completed successfully in {}ms", metrics.latency_ms);
                    return record;
                }
                Err(e) => RunFailure::new(
                    Stage::Computed,
                    Some(metrics.version),
                    RunError::Output(format!("{e:#}")),
                ),
            }
        }
        Err(failure) => failure,
    };
    debug!("Run failed after stage '{}'", failure.stage);
    report_failure(&paths.output, failure.to_record())
}

/// Log an error record and write it to `output`. A write failure is logged;
/// the record is returned either way.
pub fn report_failure(output: &Path, record: ErrorRecord) -> OutputRecord {
    error!("{}", record.error_message);
    let record = OutputRecord::Error(record);
    if let Err(e) = write_record(output, &record) {
        error!("{e:#}");
    }
    record
}
