//! Logging utilities

use log::LevelFilter;

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies.
pub fn init(default_level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(default_level);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Map a `-v` occurrence count to a level filter
pub const fn level_for_verbosity(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(u8::MAX), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LevelFilter::Info);
        init(LevelFilter::Debug);
        info!("logger initialized");
    }
}
