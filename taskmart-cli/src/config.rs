//! CLI configuration: a small optional `taskmart.toml` next to the
//! working directory, with defaults when absent.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalogue: CatalogueSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueSection {
    /// Path or URL of the catalogue CSV.
    pub source: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue: CatalogueSection::default(),
        }
    }
}

impl Default for CatalogueSection {
    fn default() -> Self {
        Self {
            source: "data/tasks.csv".to_string(),
        }
    }
}

pub fn config_path() -> PathBuf {
    PathBuf::from("taskmart.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path();
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse taskmart.toml")?)
}
