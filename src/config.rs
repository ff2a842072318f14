use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SESSION_FILE: &str = "jobconnect-session.json";
pub const DEFAULT_LOG_FILE: &str = "jobconnect.log";

/// Command-line configuration for the portal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "jobconnect", version, about = "Job marketplace portal in the terminal", long_about = None)]
pub struct Config {
    /// JSON catalog of assessments, modules and demo accounts (defaults to the built-in one)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Where the signed-in user is remembered between runs
    #[arg(long, default_value = DEFAULT_SESSION_FILE)]
    pub session_file: PathBuf,

    /// Log output file; filter with RUST_LOG
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Open a dashboard directly (job-seeker, employer, franchise, admin)
    #[arg(short, long)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["jobconnect"]).unwrap();
        assert_eq!(config.catalog, None);
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.role, None);
    }

    #[test]
    fn explicit_arguments() {
        let config = Config::try_parse_from([
            "jobconnect",
            "--catalog",
            "catalog.json",
            "--role",
            "astronaut",
        ])
        .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.role.as_deref(), Some("astronaut"));
    }
}
