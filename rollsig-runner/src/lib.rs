//! RollSig Runner — pipeline orchestration and reporting.
//!
//! This crate builds on `rollsig-core` to provide:
//! - The staged job pipeline with a single failure funnel
//! - Metrics aggregation (rows processed, signal rate, latency)
//! - Success and error output records, written exactly once per run
//! - An injectable clock for reproducible latency

pub mod clock;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, RunError};
pub use metrics::{MetricsRecord, RecordStatus, SIGNAL_RATE_METRIC};
pub use pipeline::{
    execute, report_failure, run_pipeline, CompletedRun, JobContext, JobPaths, RunFailure, Stage,
};
pub use report::{write_record, ErrorRecord, OutputRecord, UNKNOWN_VERSION};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn records_are_send_sync() {
        assert_send::<MetricsRecord>();
        assert_sync::<MetricsRecord>();
        assert_send::<ErrorRecord>();
        assert_sync::<ErrorRecord>();
        assert_send::<OutputRecord>();
        assert_sync::<OutputRecord>();
    }

    #[test]
    fn run_failure_is_send_sync() {
        assert_send::<RunFailure>();
        assert_sync::<RunFailure>();
        assert_send::<RunError>();
        assert_sync::<RunError>();
    }

    #[test]
    fn job_types_are_send_sync() {
        assert_send::<JobPaths>();
        assert_sync::<JobPaths>();
        assert_send::<JobContext>();
        assert_sync::<JobContext>();
    }
}
