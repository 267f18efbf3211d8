use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default damping factor for the random surfer model
pub const DAMPING: f64 = 0.85;
/// Default number of random-walk steps for the sampling estimator
pub const SAMPLES: usize = 10_000;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// This struct is supposed to receive all program arguments
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Directory of HTML pages to rank
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, default_value_t = DAMPING)]
    pub damping: f64,
    /// Number of random-walk steps for the sampling estimator
    #[arg(short, long, default_value_t = SAMPLES)]
    pub samples: usize,
    /// Convergence threshold for the iterative estimator
    #[arg(long, default_value_t = 0.001)]
    pub tolerance: f64,
    /// Safety cap on iteration rounds before giving up
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,
    /// Seed for the sampling walk; drawn from entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            anyhow::bail!("damping must be between 0 and 1");
        }
        if self.samples < 1 {
            anyhow::bail!("samples must be greater than 0");
        }
        if self.tolerance <= 0.0 {
            anyhow::bail!("tolerance must be greater than 0");
        }
        if self.max_iterations < 1 {
            anyhow::bail!("max_iterations must be greater than 0");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
