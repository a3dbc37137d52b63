// src/cli.rs

use clap::Parser;
use mirage_scanner::config::Settings;
use mirage_scanner::core::scanner::vulnerability_scanner::SelectionStrategy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mirage-scanner", version)]
#[command(about = "Simulated web vulnerability scanner for security education", long_about = None)]
pub struct Args {
    /// URL or bare host to scan. Prefills the input box in interactive mode.
    pub url: Option<String>,

    /// Print the report as JSON instead of starting the terminal UI
    #[arg(long)]
    pub json: bool,

    /// Print the signed-in user's scan history and exit
    #[arg(long, conflicts_with = "json")]
    pub history: bool,

    /// User id handed over by the identity provider; enables scan history
    #[arg(long)]
    pub user: Option<String>,

    /// Path to a config.toml (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cosmetic scan delay in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// How findings are ordered: legacy or shuffled
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,

    /// Skip the disclaimer popup
    #[arg(long)]
    pub no_disclaimer: bool,
}

impl Args {
    /// Flags given on the command line win over the config file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(user) = &self.user {
            settings.user_id = Some(user.clone());
        }
        if let Some(latency) = self.latency_ms {
            settings.latency_ms = latency;
        }
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if self.no_disclaimer {
            settings.show_disclaimer = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "mirage-scanner",
            "example.com",
            "--json",
            "--latency-ms",
            "0",
            "--strategy",
            "shuffled",
            "--user",
            "u1",
        ]);
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(args.url.as_deref(), Some("example.com"));
        assert_eq!(settings.latency_ms, 0);
        assert_eq!(settings.strategy, SelectionStrategy::Shuffled);
        assert_eq!(settings.user_id.as_deref(), Some("u1"));
        assert!(settings.show_disclaimer);
    }

    #[test]
    fn history_conflicts_with_json() {
        assert!(Args::try_parse_from(["mirage-scanner", "--json", "--history"]).is_err());
    }
}
