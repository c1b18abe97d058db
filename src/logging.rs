//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging, warnings only unless `RUST_LOG` says otherwise.
pub fn init() {
    let env = Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}
