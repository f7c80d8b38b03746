//! Summary metrics for a successful run.

use serde::{Deserialize, Serialize};

use rollsig_core::{JobConfig, SignalFrame};

use crate::clock::Clock;

/// Label of the single metric this job reports.
pub const SIGNAL_RATE_METRIC: &str = "signal_rate";

/// Decimal places kept in the reported signal rate.
pub const VALUE_DECIMALS: usize = 4;

/// Outcome tag carried by every output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Success,
    Error,
}

/// Success record. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub version: String,
    pub rows_processed: usize,
    pub metric: String,
    pub value: f64,
    pub latency_ms: u64,
    pub seed: u64,
    pub status: RecordStatus,
}

impl MetricsRecord {
    /// Aggregate a computed frame. Latency is read from `clock` at call time.
    pub fn from_frame(config: &JobConfig, frame: &SignalFrame, clock: &dyn Clock) -> Self {
        Self {
            version: config.version.clone(),
            rows_processed: frame.len(),
            metric: SIGNAL_RATE_METRIC.to_string(),
            value: round_to(signal_rate(&frame.signal), VALUE_DECIMALS),
            latency_ms: clock.elapsed_ms(),
            seed: config.seed,
            status: RecordStatus::Success,
        }
    }
}

/// Fraction of rows with signal 1. Zero for an empty series.
pub fn signal_rate(signal: &[u8]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let ones: usize = signal.iter().map(|&s| usize::from(s)).sum();
    ones as f64 / signal.len() as f64
}

/// Round to `decimals` places on the exact binary value, ties to even:
/// `0.03125` rounds to `0.0312`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rollsig_core::{compute_signals, Window};

    #[test]
    fn reference_metrics() {
        let config = JobConfig {
            seed: 42,
            window: 3,
            version: "v1".into(),
        };
        let frame = compute_signals(&[10.0, 12.0, 11.0, 14.0, 13.0], Window::new(3).unwrap());
        let record = MetricsRecord::from_frame(&config, &frame, &FixedClock(12));
        assert_eq!(
            record,
            MetricsRecord {
                version: "v1".into(),
                rows_processed: 5,
                metric: "signal_rate".into(),
                value: 0.6,
                latency_ms: 12,
                seed: 42,
                status: RecordStatus::Success,
            }
        );
    }

    #[test]
    fn rate_is_rounded_to_four_places() {
        assert_eq!(round_to(signal_rate(&[1, 0, 0]), 4), 0.3333);
        assert_eq!(round_to(signal_rate(&[1, 1, 0]), 4), 0.6667);
        assert_eq!(round_to(2.0 / 7.0, 4), 0.2857);
    }

    #[test]
    fn exact_ties_round_to_even() {
        let mut one_in_32 = vec![0u8; 32];
        one_in_32[0] = 1;
        assert_eq!(round_to(signal_rate(&one_in_32), 4), 0.0312);
        assert_eq!(round_to(3.0 / 32.0, 4), 0.0938);
        assert_eq!(round_to(5.0 / 32.0, 4), 0.1562);
        assert_eq!(round_to(0.6, 4), 0.6);
    }

    #[test]
    fn rate_bounds() {
        assert_eq!(signal_rate(&[]), 0.0);
        assert_eq!(signal_rate(&[0, 0]), 0.0);
        assert_eq!(signal_rate(&[1, 1]), 1.0);
    }

    #[test]
    fn serializes_in_documented_key_order() {
        let record = MetricsRecord {
            version: "v1".into(),
            rows_processed: 5,
            metric: SIGNAL_RATE_METRIC.into(),
            value: 0.6,
            latency_ms: 3,
            seed: 42,
            status: RecordStatus::Success,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"version":"v1","rows_processed":5,"metric":"signal_rate","value":0.6,"latency_ms":3,"seed":42,"status":"success"}"#
        );
    }
}
