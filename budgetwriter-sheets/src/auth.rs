//! Google OAuth (installed-app flow) for the Sheets API.
//!
//! `client_secret_file` is the "credentials.json" downloaded from
//! https://console.cloud.google.com/apis/credentials (OAuth client ID,
//! application type: Desktop app). Tokens are cached in `token_cache_file`
//! after the first browser login and refreshed from there afterwards.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use yup_oauth2::{InstalledFlowAuthenticator, InstalledFlowReturnMethod};

/// Read/write access to spreadsheets. Changing this requires deleting the token cache.
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

#[derive(Debug, Clone)]
pub struct GoogleAuthPaths {
    pub client_secret_file: PathBuf,
    pub token_cache_file: PathBuf,
}

/// Obtain an access token, running the browser flow if nothing is cached.
pub async fn access_token(paths: &GoogleAuthPaths) -> Result<String> {
    if !paths.client_secret_file.exists() {
        bail!(
            "Missing Google OAuth client secrets at {}.\n\
Create an OAuth client ID (Desktop app) at https://console.cloud.google.com/apis/credentials \
and save the downloaded JSON there.",
            paths.client_secret_file.display()
        );
    }

    let secret = yup_oauth2::read_application_secret(&paths.client_secret_file)
        .await
        .with_context(|| format!("read {}", paths.client_secret_file.display()))?;

    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
        .persist_tokens_to_disk(&paths.token_cache_file)
        .build()
        .await
        .context("building oauth authenticator")?;

    let token = auth
        .token(&[SPREADSHEETS_SCOPE])
        .await
        .context("fetching Google access token")?;

    match token.token() {
        Some(t) => Ok(t.to_string()),
        None => bail!("Google returned a token without an access token"),
    }
}
