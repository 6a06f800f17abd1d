use serde::Deserialize;
use trackwire_core::error::{Result, TrackWireError};

/// Scaffold value left in place by the project template; treated the same as
/// an unset app URL.
pub const PLACEHOLDER_APP_URL: &str = "https://your-app.web.app";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub sink: SinkSection,

    pub store: StoreSection,

    #[serde(default)]
    pub monitor: MonitorSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TrackWireError::Config("unsupported config version".into()));
        }

        self.sink.validate()?;
        self.store.validate()?;
        self.monitor.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

/// External tracking database (Notion) credentials and target.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkSection {
    pub api_token: String,
    pub database_id: String,

    #[serde(default = "default_sink_base_url")]
    pub base_url: String,

    /// Name of the database's title property.
    #[serde(default = "default_title_property")]
    pub title_property: String,
}

impl SinkSection {
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            return Err(TrackWireError::Config("sink.api_token must not be empty".into()));
        }
        if self.database_id.is_empty() {
            return Err(TrackWireError::Config("sink.database_id must not be empty".into()));
        }
        Ok(())
    }
}

fn default_sink_base_url() -> String {
    "https://api.notion.com".into()
}
fn default_title_property() -> String {
    "Tracking".into()
}

/// Realtime store (Firebase RTDB) target.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    pub base_url: String,

    /// Optional database secret / auth token, appended as a query parameter.
    #[serde(default)]
    pub auth: Option<String>,
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TrackWireError::Config(
                "store.base_url must be an http(s) URL".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Monitored application URL. Unset (or the scaffold placeholder) skips
    /// the reachability probe.
    #[serde(default)]
    pub app_url: Option<String>,

    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            app_url: None,
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl MonitorSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=60000).contains(&self.probe_timeout_ms) {
            return Err(TrackWireError::Config(
                "monitor.probe_timeout_ms must be between 1000 and 60000".into(),
            ));
        }
        Ok(())
    }

    /// The probe target, with the unset/placeholder cases collapsed to `None`.
    pub fn probe_target(&self) -> Option<&str> {
        match self.app_url.as_deref() {
            None | Some("") | Some(PLACEHOLDER_APP_URL) => None,
            Some(url) => Some(url),
        }
    }
}

fn default_probe_timeout_ms() -> u64 {
    10000
}
