//! Where budgetwriter keeps its config, OAuth client secrets and token cache.

use anyhow::{Result, bail};
use std::fs;
use std::path::PathBuf;

/// Overrides the state directory, e.g. to keep separate Google accounts apart.
pub const HOME_ENV: &str = "BUDGETWRITER_HOME";

/// `$BUDGETWRITER_HOME` if set, else `$HOME/.budgetwriter`.
pub fn budgetwriter_home() -> Result<PathBuf> {
    resolve_home(
        std::env::var_os(HOME_ENV).map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_home(explicit: Option<PathBuf>, user_home: Option<PathBuf>) -> Result<PathBuf> {
    match (explicit, user_home) {
        (Some(dir), _) if !dir.as_os_str().is_empty() => Ok(dir),
        (_, Some(home)) if !home.as_os_str().is_empty() => Ok(home.join(".budgetwriter")),
        _ => bail!("neither {HOME_ENV} nor HOME is set"),
    }
}

/// Like [`budgetwriter_home`], creating the directory on first use.
pub fn ensure_budgetwriter_home() -> Result<PathBuf> {
    let dir = budgetwriter_home()?;
    if !dir.is_dir() {
        fs::create_dir_all(&dir)
            .map_err(|e| anyhow::anyhow!("cannot create state dir {}: {e}", dir.display()))?;
    }
    Ok(dir)
}
