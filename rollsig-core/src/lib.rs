//! RollSig Core — config, input table, validation, and the signal engine.
//!
//! This crate holds the pure parts of the job:
//! - Job config loading (TOML or JSON)
//! - CSV input loading with column type inference
//! - Input validation (non-empty, numeric `close` column)
//! - Rolling mean and above-mean signal computation
//! - Seeded run RNG

pub mod config;
pub mod rng;
pub mod signal;
pub mod table;
pub mod validate;

pub use config::{ConfigError, ConfigFormat, JobConfig};
pub use rng::RunRng;
pub use signal::{compute_signals, rolling_mean, SignalError, SignalFrame, Window};
pub use table::{Column, ColumnData, ColumnType, InputTable, LoadError};
pub use validate::{validate, ValidationError, CLOSE_COLUMN};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn config_is_send_sync() {
        assert_send::<JobConfig>();
        assert_sync::<JobConfig>();
        assert_send::<RunRng>();
        assert_sync::<RunRng>();
    }

    #[test]
    fn table_is_send_sync() {
        assert_send::<InputTable>();
        assert_sync::<InputTable>();
    }

    #[test]
    fn signal_frame_is_send_sync() {
        assert_send::<SignalFrame>();
        assert_sync::<SignalFrame>();
        assert_send::<Window>();
        assert_sync::<Window>();
    }
}
