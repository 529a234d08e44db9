pub mod observability;
pub mod toml;

use rustls::crypto::ring;

pub use crate::observability::setup_tracing;

/// Initializes a process that embeds the trading core.
///
/// Installs the panic hook, the JSON tracing subscriber and the rustls crypto
/// provider used by the RPC transport. Call it once, early in `main`.
///
/// # Arguments
///
/// * `name` - The name of the application (typically `env!("CARGO_PKG_NAME")`).
///
/// # Errors
///
/// Returns an error if a global subscriber or crypto provider is already installed.
///
/// # Example
///
/// ```no_run
/// use tools::setup_application;
///
/// setup_application(env!("CARGO_PKG_NAME")).expect("Setup failed");
/// ```
pub fn setup_application(name: &'static str) -> anyhow::Result<()> {
    setup_panic_hook();
    setup_tracing(name)?;
    setup_tls_provider()
}

/// Sets up a custom panic hook for the application.
///
/// Panic information is logged through `tracing`, with the source location
/// recorded as structured fields when available. After logging, the process
/// exits with code 1.
pub fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Some(location) = panic_info.location() {
            tracing::error!(
                message = %panic_info,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic_info);
        }

        #[allow(clippy::exit)]
        std::process::exit(1);
    }))
}

/// Installs the rustls crypto provider (ring backend).
///
/// rustls 0.23+ does not pick a process-level provider on its own, and the
/// HTTPS transport behind the Solana RPC client panics on the first handshake
/// without one.
pub fn setup_tls_provider() -> anyhow::Result<()> {
    ring::default_provider()
        .install_default()
        .map_err(|e| anyhow::anyhow!("Failed to install rustls crypto provider: {e:?}"))
}
