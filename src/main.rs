use std::fs::File;
use std::sync::Mutex;

use clap::Parser;
use jobconnect::{Config, Portal};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::parse();

    // The terminal belongs to the UI, so logs go to a file.
    match File::create(&config.log_file) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("jobconnect=info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }

    let result = Portal::from_config(&config).and_then(Portal::run);
    if let Err(e) = result {
        error!(error = %e, "portal exited with an error");
        eprintln!("Error running portal: {}", e);
        std::process::exit(1);
    }
}
