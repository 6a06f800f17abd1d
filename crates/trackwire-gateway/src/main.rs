//! trackwire gateway server.
//!
//! - Webhook endpoint: POST /webhook
//! - Liveness: GET /health
//! - One sink record per delivery, no retries, no dedup

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use trackwire_gateway::{app_state, config, router, sink::NotionSink};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "trackwire.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let sink = Arc::new(NotionSink::new(&cfg.sink));
    let state = app_state::AppState::new(sink);
    let app = router::build_router(state);

    tracing::info!(%listen, "trackwire-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
