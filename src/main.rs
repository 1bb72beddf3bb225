pub mod config;
pub mod engines;
pub mod normalize;
pub mod output;
pub mod parse;
pub mod search;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, output::Output};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout belongs to the json payload, logs only show up on stderr when
    // RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
    // panics are reported in the payload, keep the default hook off stderr
    std::panic::set_hook(Box::new(|info| tracing::error!("{info}")));

    let args = search::query_args(std::env::args_os().skip(1));

    let output = search::run_guarded(async move {
        match Config::base() {
            Ok(config) => search::run(&args, &config).await,
            Err(e) => Output::error(format!("{e:#}")),
        }
    })
    .await;

    let line = output.to_json().unwrap_or_else(|e| {
        tracing::error!("failed to serialize output: {e:#}");
        r#"{"error": "failed to serialize output", "results": []}"#.to_string()
    });
    println!("{line}");
}
