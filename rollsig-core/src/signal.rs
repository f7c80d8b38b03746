//! Rolling mean and above/below-mean signal over close prices.
//!
//! The rolling mean is a trailing window with a minimum period of one: row `i`
//! averages the non-missing closes in `close[max(0, i + 1 - window) ..= i]`, so
//! every row has a value as soon as one observation is available. Each mean is
//! summed from its own slice, which keeps `window = 1` exact and results
//! bit-identical across runs.

use std::num::NonZeroUsize;
use thiserror::Error;

use crate::table::{ColumnData, InputTable};

pub const ROLLING_MEAN_COLUMN: &str = "rolling_mean";
pub const SIGNAL_COLUMN: &str = "signal";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("Invalid window {0}: must be a positive integer")]
    InvalidWindow(i64),
}

/// Validated rolling window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window(NonZeroUsize);

impl Window {
    pub fn new(len: i64) -> Result<Self, SignalError> {
        usize::try_from(len)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Window)
            .ok_or(SignalError::InvalidWindow(len))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Window {
    type Error = SignalError;

    fn try_from(len: i64) -> Result<Self, Self::Error> {
        Window::new(len)
    }
}

/// Derived columns, aligned by position with the input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalFrame {
    pub rolling_mean: Vec<f64>,
    pub signal: Vec<u8>,
}

impl SignalFrame {
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Append `rolling_mean` and `signal` to the table.
    pub fn attach_to(&self, table: &mut InputTable) {
        table.set_column(
            ROLLING_MEAN_COLUMN,
            ColumnData::Float(self.rolling_mean.clone()),
        );
        table.set_column(
            SIGNAL_COLUMN,
            ColumnData::Int(self.signal.iter().map(|&s| i64::from(s)).collect()),
        );
    }
}

/// Trailing mean with minimum period 1. NaN inputs are skipped; a window with
/// no observations yields NaN.
pub fn rolling_mean(values: &[f64], window: Window) -> Vec<f64> {
    let w = window.get();
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(w);
            let (sum, count) = values[start..=i]
                .iter()
                .filter(|v| !v.is_nan())
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
        .collect()
}

/// 1 where the value is strictly above its mean, else 0. NaN on either side
/// compares false.
pub fn above_mean(values: &[f64], means: &[f64]) -> Vec<u8> {
    values
        .iter()
        .zip(means)
        .map(|(v, m)| u8::from(v > m))
        .collect()
}

/// Rolling mean and signal for a close series.
pub fn compute_signals(close: &[f64], window: Window) -> SignalFrame {
    let rolling_mean = rolling_mean(close, window);
    let signal = above_mean(close, &rolling_mean);
    SignalFrame {
        rolling_mean,
        signal,
    }
}
