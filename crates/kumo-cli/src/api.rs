//! Kumo API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Kumo
pub struct KumoClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct WittyFactResponse {
    pub fact: String,
}

#[derive(Debug, Deserialize)]
pub struct FactResponse {
    pub id: Uuid,
    pub text: String,
    pub fingerprint: String,
}

#[derive(Debug, Serialize)]
pub struct CreateFactRequest {
    pub text: String,
}

impl KumoClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Fetch one witty fact
    pub async fn witty_fact(&self) -> Result<String> {
        let url = format!("{}/kumo/fact", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Kumo API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let witty: WittyFactResponse = resp.json().await.context("Failed to parse response")?;

        Ok(witty.fact)
    }

    /// List the fact pool
    pub async fn list_facts(&self) -> Result<Vec<FactResponse>> {
        let url = format!("{}/kumo/facts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Kumo API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let facts: Vec<FactResponse> = resp.json().await.context("Failed to parse response")?;

        Ok(facts)
    }

    /// Add a fact to the pool
    pub async fn add_fact(&self, text: String) -> Result<FactResponse> {
        let url = format!("{}/kumo/facts", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateFactRequest { text })
            .send()
            .await
            .context("Failed to connect to Kumo API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let fact: FactResponse = resp.json().await.context("Failed to parse response")?;

        Ok(fact)
    }

    /// Remove a fact from the pool
    pub async fn remove_fact(&self, id: Uuid) -> Result<()> {
        let url = format!("{}/kumo/facts/{}", self.base_url, id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Kumo API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }
}
