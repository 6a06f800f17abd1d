//! Sink connectivity diagnostics: verifies credentials against the tracking
//! database and prints its title and column layout.

use tracing_subscriber::{fmt, EnvFilter};

use trackwire_gateway::{config, sink::NotionSink};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "trackwire.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");

    let sink = NotionSink::new(&cfg.sink);
    match sink.retrieve_database().await {
        Ok(info) => {
            println!("sink connection OK");
            println!("database: {}", info.title);
            println!("columns:");
            for prop in &info.properties {
                println!("- {:?} (type: {})", prop.name, prop.kind);
            }
        }
        Err(e) => {
            eprintln!("sink connection failed: {e}");
            std::process::exit(1);
        }
    }
}
