//! One-shot monitoring pass. Run this from cron or a platform scheduler;
//! there is no internal loop.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use trackwire_gateway::{
    config,
    monitor::MonitorRunner,
    sink::NotionSink,
    store::FirebaseStore,
};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "trackwire.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");

    let store = Arc::new(FirebaseStore::new(&cfg.store));
    let sink = Arc::new(NotionSink::new(&cfg.sink));

    let runner = MonitorRunner::new(store, sink, &cfg.monitor);
    runner.run().await;
}
