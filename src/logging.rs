// Logging setup shared by both binaries, plus tracing macros that compile
// away in release builds.

/// Initialise `env_logger` on stderr. `RUST_LOG` overrides the default
/// `warn` level; stdout stays reserved for the game and the fit report.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
