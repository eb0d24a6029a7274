// Logger setup - env_logger backend for the `log` macros re-exported at the crate root

use log::LevelFilter;

/// Level used when nothing else is configured: Debug in debug builds, Info in release
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Pick the level: `-v` flags first, then the settings file, then the build default
pub fn resolve_level(configured: Option<LevelFilter>, verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => configured.unwrap_or_else(default_level),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger; RUST_LOG, when set, overrides `level`
///
/// Returns false if a logger was already installed.
pub fn init(level: LevelFilter) -> bool {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_configured_level() {
        assert_eq!(resolve_level(Some(LevelFilter::Warn), 1), LevelFilter::Debug);
        assert_eq!(resolve_level(Some(LevelFilter::Warn), 3), LevelFilter::Trace);
    }

    #[test]
    fn test_configured_level_used_without_verbosity() {
        assert_eq!(resolve_level(Some(LevelFilter::Error), 0), LevelFilter::Error);
        assert_eq!(resolve_level(None, 0), default_level());
    }

    #[test]
    fn test_second_init_is_rejected() {
        init(LevelFilter::Off);
        assert!(!init(LevelFilter::Off));
    }
}
