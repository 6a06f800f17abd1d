//! One-shot automated test suite: probes the app URL, prints the outcomes,
//! and writes the scored summary to the sink.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use trackwire_gateway::{autotest, config, sink::NotionSink};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "trackwire.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");

    let sink = Arc::new(NotionSink::new(&cfg.sink));
    let runner = autotest::AutoTestRunner::new(sink, &cfg.monitor);

    let outcomes = runner.run().await;
    print!("{}", autotest::summary(&outcomes));
}
