use anyhow::{Context, Result, bail};
use budgetwriter_sheets::{GoogleAuthPaths, SheetLayout};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{budgetwriter_home, ensure_budgetwriter_home};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetLayout,
    pub google: GoogleSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoogleSection {
    /// OAuth client secrets downloaded from Google Cloud Console.
    /// Defaults to ~/.budgetwriter/credentials.json
    pub client_secret_file: Option<PathBuf>,
    /// Defaults to ~/.budgetwriter/token.json
    pub token_cache_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// tracing filter directive, e.g. "debug" or "budgetwriter_sheets=debug"
    pub level: Option<String>,
}

impl Config {
    pub fn google_paths(&self) -> Result<GoogleAuthPaths> {
        let client_secret_file = match &self.google.client_secret_file {
            Some(p) => p.clone(),
            None => ensure_budgetwriter_home()?.join("credentials.json"),
        };
        let token_cache_file = match &self.google.token_cache_file {
            Some(p) => p.clone(),
            None => ensure_budgetwriter_home()?.join("token.json"),
        };
        Ok(GoogleAuthPaths {
            client_secret_file,
            token_cache_file,
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(budgetwriter_home()?.join("config.toml"))
}

/// Load `explicit` if given (it must exist), else ~/.budgetwriter/config.toml
/// falling back to defaults when that file is absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        if !p.exists() {
            bail!("Config file not found: {}", p.display());
        }
        return read_config(p);
    }

    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    read_config(&p)
}

fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    cfg.sheet
        .validate()
        .with_context(|| format!("invalid [sheet] in {}", p.display()))?;
    Ok(cfg)
}
