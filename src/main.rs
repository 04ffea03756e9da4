//! OpenSSL provider lifecycle probe.
//!
//! Loads one provider and ends its life in one of six ways, chosen by the
//! first argument, so that libcrypto's exit-time cleanup can be checked
//! for double frees and use-after-free.
//!
//! ```text
//! 0  leave loaded                     3  atexit after init
//! 1  unload right after load          4  OPENSSL_atexit after init
//! 2  atexit before init               5  OPENSSL_cleanup at end
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;

use provider_lifecycle_probe::cli::Cli;
use provider_lifecycle_probe::config::{load_config, ProbeConfig};
use provider_lifecycle_probe::library::OpenSsl;
use provider_lifecycle_probe::observability::init_logging;
use provider_lifecycle_probe::{run, ProbeError};

fn report_failure(err: &ProbeError) {
    tracing::error!(error = %err, "Probe run failed");

    if let ProbeError::ProviderLoad { report, .. } = err {
        for line in report {
            eprintln!("{}", line);
        }
        if !report.is_empty() {
            return;
        }
    }
    eprintln!("Error: {}", err);
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                let err = ProbeError::from(e);
                eprintln!("Error: {} ({})", err, path.display());
                return err.exit_code().map_or(ExitCode::FAILURE, ExitCode::from);
            }
        },
        None => ProbeConfig::default(),
    };

    if let Some(name) = &cli.provider {
        config.provider.name = name.clone();
    }

    init_logging(cli.verbose, &config.logging.filter);

    let mode = cli.mode();
    tracing::debug!(raw = cli.mode.as_deref().unwrap_or(""), %mode, "Mode selected");

    let mut lib = OpenSsl::new();
    match run(&mut lib, mode, &config.provider.name, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            err.exit_code().map_or(ExitCode::FAILURE, ExitCode::from)
        }
    }
}
