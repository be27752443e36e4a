use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::weather::WeatherReport;

/// One catalog entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSeed {
    pub title: String,
    pub author: String,
    /// Price in dollars, e.g. `12.99`.
    pub price: f64,
    pub stock: u32,
}

impl BookSeed {
    fn new(title: &str, author: &str, price: f64, stock: u32) -> Self {
        Self { title: title.into(), author: author.into(), price, stock }
    }
}

/// Seed data loaded at startup.
///
/// The file only seeds a run: stock changes and password updates made during
/// a session are never written back.
///
/// Example TOML:
/// [users]
/// admin = "admin123"
///
/// [[catalog]]
/// title = "Ulysses"
/// author = "James Joyce"
/// price = 12.99
/// stock = 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_users")]
    pub users: BTreeMap<String, String>,

    #[serde(default = "default_catalog")]
    pub catalog: Vec<BookSeed>,

    #[serde(default = "default_weather")]
    pub weather: Vec<WeatherReport>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users: default_users(),
            catalog: default_catalog(),
            weather: default_weather(),
        }
    }
}

fn default_users() -> BTreeMap<String, String> {
    [("admin", "admin123"), ("user1", "password1")]
        .into_iter()
        .map(|(u, p)| (u.to_string(), p.to_string()))
        .collect()
}

fn default_catalog() -> Vec<BookSeed> {
    vec![
        BookSeed::new("The Great Gatsby", "F. Scott Fitzgerald", 15.99, 5),
        BookSeed::new("War and Peace", "Leo Tolstoy", 19.99, 10),
        BookSeed::new("Ulysses", "James Joyce", 12.99, 2),
    ]
}

fn default_weather() -> Vec<WeatherReport> {
    vec![
        WeatherReport::new("New York", 70, "Sunny", 50),
        WeatherReport::new("London", 60, "Cloudy", 65),
        WeatherReport::new("Tokyo", 75, "Rainy", 70),
    ]
}

impl Config {
    /// Load config from the platform config directory, or the built-in
    /// defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Default path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "bookstore", "bookstore-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
