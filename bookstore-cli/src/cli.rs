use anyhow::{Context, bail};
use bookstore_core::{Bookstore, Config, StaticWeather};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{shop, weather};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about = "Bookstore and weather CLI")]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Diagnostics level, written to stderr. `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Defaults to `shop` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and browse the bookstore interactively.
    Shop,

    /// Look up the weather for a city.
    Weather {
        /// City name; if absent, prompts repeatedly until `exit`.
        city: Option<String>,
    },

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file location.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Write the built-in defaults to the config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let path = self.config_path()?;

        match self.command.unwrap_or(Command::Shop) {
            Command::Shop => {
                let config = Config::load_from(&path)?;
                let mut store = Bookstore::from_config(&config)
                    .with_context(|| format!("Invalid catalog in {}", path.display()))?;
                shop::run(&mut store)?;
            }
            Command::Weather { city } => {
                let config = Config::load_from(&path)?;
                let source = StaticWeather::new(config.weather);
                weather::run(&source, city)?;
            }
            Command::Config { action } => match action {
                ConfigAction::Path => println!("{}", path.display()),
                ConfigAction::Show => print!("{}", Config::load_from(&path)?.to_toml()?),
                ConfigAction::Init { force } => {
                    if path.exists() && !force {
                        bail!(
                            "Config file already exists: {}\n\
                             Hint: pass `--force` to overwrite it.",
                            path.display()
                        );
                    }
                    Config::default().save_to(&path)?;
                    println!("Wrote default config to {}", path.display());
                }
            },
        }

        Ok(())
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_shop() {
        let cli = Cli::try_parse_from(["bookstore"]).unwrap();

        assert!(cli.command.is_none());
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }

    #[test]
    fn weather_city_is_optional() {
        let cli = Cli::try_parse_from(["bookstore", "weather", "London"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Weather { city: Some(ref c) }) if c == "London"
        ));

        let cli = Cli::try_parse_from(["bookstore", "weather"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Weather { city: None })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bookstore",
            "config",
            "init",
            "--force",
            "--config",
            "/tmp/bookstore.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Some(Command::Config { action: ConfigAction::Init { force: true } })
        ));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bookstore.toml")));
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn unknown_log_level_rejected() {
        assert!(Cli::try_parse_from(["bookstore", "--log-level", "loud"]).is_err());
    }
}
