//! Shared application state for the trackwire gateway.
//!
//! The sink is injected as a trait object so tests can substitute a recording
//! fake; the production binary constructs a `NotionSink` once at startup.

use std::sync::Arc;

use crate::sink::TrackingSink;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    sink: Arc<dyn TrackingSink>,
}

impl AppState {
    pub fn new(sink: Arc<dyn TrackingSink>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { sink }),
        }
    }

    pub fn sink(&self) -> Arc<dyn TrackingSink> {
        Arc::clone(&self.inner.sink)
    }
}
