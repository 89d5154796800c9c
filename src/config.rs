// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::catalog::LookupOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trim and upper-case codes before looking them up.
    pub normalize_input: bool,
    /// Show the code itself when no display name exists.
    pub fallback_to_code: bool,
    pub output_dir: PathBuf,
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_input: false,
            fallback_to_code: false,
            output_dir: PathBuf::from("output"),
            database_url: "sqlite://currencies.db".to_string(),
        }
    }
}

impl Config {
    /// Read `config.toml` if there is one, otherwise use the defaults.
    /// `DATABASE_URL` from the environment wins over both.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config = Self::load_or_default_from(&get_config_path())?;
        Ok(config.apply_overrides(env::var("DATABASE_URL").ok()))
    }

    pub fn load_or_default_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            load_config_from(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    pub fn apply_overrides(mut self, database_url: Option<String>) -> Self {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        self
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            normalize: self.normalize_input,
            fallback_to_code: self.fallback_to_code,
        }
    }
}

fn get_config_path() -> PathBuf {
    config_path_from(env::var_os("CURRENCY_NAMES_CONFIG").map(PathBuf::from))
}

fn config_path_from(override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("config.toml");
        path
    })
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &Config) -> anyhow::Result<()> {
    save_config_to(config, &get_config_path())
}

pub fn save_config_to(config: &Config, path: &Path) -> anyhow::Result<()> {
    let config_str = toml::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}
