// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries, demos and benchmarks
// ============================================================================

use tracing::Level;

/// Install a formatted `tracing` subscriber writing to stderr.
///
/// The library itself only emits events; call this once from a binary to see
/// them. Solver start/finish are logged at DEBUG, each iteration at TRACE and
/// divergence at WARN.
///
/// # Errors
/// Returns an error if a global subscriber was already installed.
pub fn init_logging(max_level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())
}
