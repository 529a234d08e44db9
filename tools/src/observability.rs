use std::env;

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs the global JSON log subscriber.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Noisy transport
/// crates used by the Solana RPC client are capped at `error`.
pub fn setup_tracing(name: &'static str) -> anyhow::Result<()> {
    let fmt_log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());

    let filter_fmt = EnvFilter::new(fmt_log_level.clone())
        .add_directive(format!("{name}={fmt_log_level}").parse()?)
        .add_directive("reqwest=error".parse()?)
        .add_directive("hyper=error".parse()?)
        .add_directive("solana_rpc_client=warn".parse()?);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_thread_names(true)
        .json()
        .flatten_event(true)
        .with_level(true)
        .with_line_number(true)
        .with_filter(filter_fmt);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}
