use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

// In library code use the `tracing` macros directly:
//
//   info!  — start and end of a training run
//   debug! — one line per epoch
//   trace! — one line per weight update

/// Installs a compact fmt subscriber as the global default.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
