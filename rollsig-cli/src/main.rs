//! RollSig CLI — run the rolling-mean signal job once.
//!
//! Reads a config and a CSV of closes, writes one JSON record (metrics or
//! error) to `--output`, echoes it to stdout, and appends progress to
//! `--log-file`. Exits 0 on success and 1 on any failure.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rollsig_runner::{execute, report_failure, ErrorRecord, JobPaths, SystemClock};

#[derive(Parser)]
#[command(
    name = "rollsig",
    about = "RollSig — rolling-mean signal rate over a close price series"
)]
struct Cli {
    /// Input CSV with a header row and a numeric `close` column.
    #[arg(long)]
    input: PathBuf,

    /// Job config: TOML, or JSON/YAML by `.json`/`.yaml`/`.yml` extension.
    #[arg(long)]
    config: PathBuf,

    /// Where the metrics or error JSON is written.
    #[arg(long)]
    output: PathBuf,

    /// Log file, appended to.
    #[arg(long)]
    log_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let clock = SystemClock::start_now();

    let record = match init_logging(&cli.log_file) {
        Ok(()) => {
            let paths = JobPaths {
                input: cli.input,
                config: cli.config,
                output: cli.output,
            };
            execute(&paths, &clock)
        }
        Err(e) => report_failure(&cli.output, ErrorRecord::new(None, format!("{e:#}"))),
    };

    match record.console_line() {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("ERROR: {e:#}"),
    }

    log::logger().flush();
    std::process::exit(record.exit_code());
}

/// Route `log` records to the log file as `<timestamp> - <LEVEL> - <message>`.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

