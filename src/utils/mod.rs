use std::path::PathBuf;
use std::sync::Once;

/// Environment variable that overrides the application base directory.
pub const DATA_DIR_ENV: &str = "COACH_CORE_DATA_DIR";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("coach_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Resolves the application base directory.
///
/// Order: `COACH_CORE_DATA_DIR` override, the platform data directory, then
/// the current working directory as a last resort.
pub fn base_dir() -> PathBuf {
    if let Some(overridden) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(overridden);
    }
    dirs::data_dir()
        .map(|dir| dir.join("coach_core"))
        .unwrap_or_else(|| PathBuf::from(".").join("coach_core"))
}

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &std::path::Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
