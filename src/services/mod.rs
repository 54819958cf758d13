use crate::config::PersonsConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Connectivity check against the hosted products table.
#[async_trait]
pub trait ProductsProbe: Send + Sync {
    /// Returns the raw body of a "select everything" query.
    async fn fetch_products(&self) -> Result<String>;
}

// a client is built per probe, after the credentials check
pub struct SupabaseProbe {
    pub url: Option<String>,
    pub key: Option<String>,
    pub table: String,
}

impl SupabaseProbe {
    pub fn new(url: Option<String>, key: Option<String>, table: String) -> Self {
        Self { url, key, table }
    }

    pub fn from_config(config: &PersonsConfig) -> Self {
        Self::new(
            config.supabase_url.clone(),
            config.supabase_key.clone(),
            config.supabase_table.clone(),
        )
    }

    pub fn endpoint(&self, base_url: &str) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            base_url.trim_end_matches('/'),
            self.table
        )
    }
}

#[async_trait]
impl ProductsProbe for SupabaseProbe {
    async fn fetch_products(&self) -> Result<String> {
        let (url, key) = match (&self.url, &self.key) {
            (Some(url), Some(key)) => (url, key),
            _ => anyhow::bail!("SUPABASE_URL and SUPABASE_KEY must both be set"),
        };

        let endpoint = self.endpoint(url);
        tracing::debug!(endpoint = %endpoint, "probing products table");

        let response = Client::new()
            .get(&endpoint)
            .header("apikey", key)
            .bearer_auth(key)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read probe response body")?;

        if !status.is_success() {
            anyhow::bail!("Status {}: {}", status, body);
        }

        Ok(body)
    }
}
