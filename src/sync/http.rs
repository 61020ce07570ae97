//! Blocking HTTP implementation of the `Remote` trait against a
//! PostgREST-style endpoint: one row per `(user_id, category)` with a
//! JSON `data` payload and a server-side `updated_at` timestamp.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::keys::Category;
use crate::sync::{Remote, Session};

pub struct HttpRemote {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

#[derive(Serialize)]
struct PushRow<'a> {
    user_id: &'a str,
    category: &'a str,
    data: serde_json::Value,
    updated_at: String,
}

#[derive(Deserialize)]
struct PullRow {
    category: String,
    data: serde_json::Value,
}

impl HttpRemote {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            client: Client::new(),
        }
    }

    /// None when the config carries no remote endpoint: the tool then
    /// runs purely local.
    pub fn from_config(cfg: &Config) -> Option<Self> {
        let url = cfg.remote_url.as_deref()?;
        let key = cfg.remote_api_key.as_deref().unwrap_or_default();
        Some(Self::new(url, key, &cfg.remote_table))
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl Remote for HttpRemote {
    fn push(&self, session: &Session, category: Category, payload: &str) -> AppResult<()> {
        // payloads are stored as JSON text; the remote column is typed
        let data: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| AppError::Sync(format!("payload for {}: {}", category.key(), e)))?;

        let row = PushRow {
            user_id: &session.user_id,
            category: category.key(),
            data,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };

        let resp = self
            .client
            .post(format!("{}?on_conflict=user_id,category", self.endpoint()))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .map_err(|e| AppError::Sync(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::Sync(format!(
                "push {}: HTTP {}",
                category.key(),
                resp.status()
            )));
        }
        Ok(())
    }

    fn pull_all(&self, session: &Session) -> AppResult<Vec<(Category, String)>> {
        let user_filter = format!("eq.{}", session.user_id);

        let resp = self
            .client
            .get(self.endpoint())
            .query(&[("select", "category,data"), ("user_id", user_filter.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .map_err(|e| AppError::Sync(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::Sync(format!("pull: HTTP {}", resp.status())));
        }

        let rows: Vec<PullRow> = resp.json().map_err(|e| AppError::Sync(e.to_string()))?;

        // unknown categories from newer versions are skipped, not errors
        let mut out = Vec::new();
        for row in rows {
            if let Some(category) = Category::from_key(&row.category) {
                let payload = serde_json::to_string(&row.data)
                    .map_err(|e| AppError::Sync(e.to_string()))?;
                out.push((category, payload));
            }
        }
        Ok(out)
    }
}
