//! Notion REST client for the tracking sink.

use async_trait::async_trait;
use serde_json::{json, Value};

use trackwire_core::error::{Result, TrackWireError};
use trackwire_core::record::TrackedRecord;

use crate::config::SinkSection;
use crate::sink::TrackingSink;

/// Pinned Notion API revision.
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionSink {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    database_id: String,
    title_property: String,
}

impl NotionSink {
    pub fn new(cfg: &SinkSection) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_token: cfg.api_token.clone(),
            database_id: cfg.database_id.clone(),
            title_property: cfg.title_property.clone(),
        }
    }

    fn page_properties(&self, record: &TrackedRecord) -> Value {
        json!({
            (self.title_property.as_str()): {
                "title": [{ "text": { "content": record.title.as_str() } }]
            },
            "Status": {
                "select": { "name": record.status.as_str() }
            },
            "Progress": {
                "number": record.progress
            },
            "Description": {
                "rich_text": [{ "text": { "content": record.description.as_str() } }]
            },
            "Date": {
                "date": { "start": record.timestamp.as_str() }
            }
        })
    }

    /// Retrieve the target database's title and column layout. Used by the
    /// `doctor` binary to verify credentials and schema.
    pub async fn retrieve_database(&self) -> Result<DatabaseInfo> {
        let url = format!("{}/v1/databases/{}", self.base_url, self.database_id);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("sink retrieve failed: {e}")))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("sink response invalid: {e}")))?;
        if !status.is_success() {
            return Err(TrackWireError::ExternalService(format!(
                "sink retrieve rejected ({status}): {body}"
            )));
        }

        let title = body["title"][0]["plain_text"].as_str().unwrap_or("").to_string();
        let properties = body["properties"]
            .as_object()
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| PropertyInfo {
                        name: name.clone(),
                        kind: prop["type"].as_str().unwrap_or("unknown").to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(DatabaseInfo { title, properties })
    }
}

#[async_trait]
impl TrackingSink for NotionSink {
    async fn create_record(&self, record: &TrackedRecord) -> Result<()> {
        let url = format!("{}/v1/pages", self.base_url);
        let body = json!({
            "parent": { "database_id": self.database_id.as_str() },
            "properties": self.page_properties(record),
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| TrackWireError::ExternalService(format!("sink create failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(TrackWireError::ExternalService(format!(
                "sink create rejected ({status}): {detail}"
            )));
        }

        tracing::debug!(title = %record.title, "sink record created");
        Ok(())
    }
}

/// Database title and column layout, as reported by the sink.
#[derive(Debug, Clone)]
pub struct DatabaseInfo {
    pub title: String,
    pub properties: Vec<PropertyInfo>,
}

#[derive(Debug, Clone)]
pub struct PropertyInfo {
    pub name: String,
    /// Column type as named by the sink ("title", "select", "number", ...).
    pub kind: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use trackwire_core::record::RecordStatus;

    fn sink() -> NotionSink {
        NotionSink::new(&SinkSection {
            api_token: "secret".into(),
            database_id: "db0".into(),
            base_url: "https://api.notion.com".into(),
            title_property: "Tracking".into(),
        })
    }

    #[test]
    fn page_properties_cover_all_columns() {
        let record = TrackedRecord {
            title: "Commit: init...".into(),
            status: RecordStatus::InProgress,
            progress: 10,
            description: "Author: Unknown, Branch: main".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
        };
        let props = sink().page_properties(&record);

        assert_eq!(props["Tracking"]["title"][0]["text"]["content"], "Commit: init...");
        assert_eq!(props["Status"]["select"]["name"], "In Progress");
        assert_eq!(props["Progress"]["number"], 10);
        assert_eq!(props["Date"]["date"]["start"], "2026-01-01T00:00:00Z");
    }
}
