//! Google Sheets v4 REST client (values.get / values.batchUpdate).

use anyhow::{Context, Result, anyhow, bail};
use reqwest::Url;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::backend::{BatchUpdateValuesRequest, SheetsBackend, ValueRange};

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";

pub struct SheetsClient {
    http: reqwest::Client,
    base_url: Url,
    access_token: String,
}

impl SheetsClient {
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(SHEETS_BASE_URL, access_token)
    }

    pub fn with_base_url(base_url: &str, access_token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url).with_context(|| format!("parse {base_url}"))?,
            access_token: access_token.into(),
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be a base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url> {
        self.url(&["spreadsheets", spreadsheet_id, "values", range])
    }

    pub(crate) fn batch_update_url(&self, spreadsheet_id: &str) -> Result<Url> {
        self.url(&["spreadsheets", spreadsheet_id, "values:batchUpdate"])
    }
}

impl SheetsBackend for SheetsClient {
    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(spreadsheet_id, range)?;
        debug!(%url, "values.get");

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await
            .with_context(|| format!("reading {range}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("sheets error reading {range}: {status} {txt}");
        }

        let out: ValueRange = resp
            .json()
            .await
            .with_context(|| format!("parse values for {range}"))?;
        Ok(out.string_rows())
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateValuesRequest,
    ) -> Result<()> {
        let url = self.batch_update_url(spreadsheet_id)?;
        debug!(%url, ranges = request.data.len(), "values.batchUpdate");

        let resp = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .json(request)
            .send()
            .await
            .context("sheets batch update request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("sheets error on batch update: {status} {txt}");
        }
        Ok(())
    }
}
