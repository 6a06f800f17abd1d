//! Firebase Realtime Database REST client.
//!
//! RTDB exposes every path as `{base}/{path}.json`; an absent path reads as
//! the JSON literal `null`.

use async_trait::async_trait;
use serde_json::Value;

use trackwire_core::error::{Result, TrackWireError};
use trackwire_core::record::MetricsSnapshot;

use crate::config::StoreSection;
use crate::store::MetricsStore;

pub struct FirebaseStore {
    http: reqwest::Client,
    base_url: String,
    auth: Option<String>,
}

impl FirebaseStore {
    pub fn new(cfg: &StoreSection) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            auth: cfg.auth.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        let mut url = format!("{}/{path}.json", self.base_url);
        if let Some(auth) = &self.auth {
            url.push_str("?auth=");
            url.push_str(auth);
        }
        url
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("store read failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackWireError::ExternalService(format!(
                "store read rejected ({status})"
            )));
        }
        resp.json()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("store response invalid: {e}")))
    }
}

#[async_trait]
impl MetricsStore for FirebaseStore {
    async fn ping(&self) -> Result<()> {
        // shallow=true keeps the probe cheap on populated databases
        let mut url = self.url("");
        url.push_str(if url.contains('?') { "&" } else { "?" });
        url.push_str("shallow=true");
        self.get_json(&url).await.map(|_| ())
    }

    async fn read_metrics(&self) -> Result<Option<MetricsSnapshot>> {
        let value = self.get_json(&self.url("metrics")).await?;
        if value.is_null() {
            return Ok(None);
        }
        let snapshot = serde_json::from_value(value)
            .map_err(|e| TrackWireError::ExternalService(format!("metrics malformed: {e}")))?;
        Ok(Some(snapshot))
    }

    async fn write_metrics(&self, snapshot: &MetricsSnapshot) -> Result<()> {
        let resp = self
            .http
            .put(self.url("metrics"))
            .json(snapshot)
            .send()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("store write failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackWireError::ExternalService(format!(
                "store write rejected ({status})"
            )));
        }
        Ok(())
    }
}
