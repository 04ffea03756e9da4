//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::lifecycle::Mode;

#[derive(Debug, Parser)]
#[command(name = "provider-lifecycle-probe")]
#[command(about = "Exercise OpenSSL provider load/unload ordering around process exit", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Unload regime: 0 leak, 1 inline, 2/3 atexit before/after init,
    /// 4 OPENSSL_atexit, 5 OPENSSL_cleanup. Anything else acts as 0.
    pub mode: Option<String>,

    /// Provider to load (overrides the config file).
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log lifecycle steps to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::parse_arg(self.mode.as_deref())
    }
}
