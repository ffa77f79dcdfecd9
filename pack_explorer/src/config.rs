//! Env parsing and defaults for the viewer.

use std::path::PathBuf;
use std::str::FromStr;

const RESULT_ENV: &str = "PACKVIZ_RESULT";
const SELECT_ENV: &str = "PACKVIZ_SELECT";
const COLOR_SEED_ENV: &str = "PACKVIZ_COLOR_SEED";
const SCREENSHOT_ENV: &str = "PACKVIZ_SCREENSHOT";
const LOG_ENV: &str = "PACKVIZ_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Everything the viewer reads from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Result file imported at startup.
    pub result_path: Option<PathBuf>,
    /// Packing index displayed once the startup import succeeds.
    pub initial_selection: Option<usize>,
    /// Seed for block colors; entropy when unset.
    pub color_seed: Option<u64>,
    /// Capture the first displayed view to this PNG, then exit.
    pub screenshot_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            result_path: None,
            initial_selection: None,
            color_seed: None,
            screenshot_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Reads the viewer configuration from environment variables.
/// Unset or empty variables keep their defaults; unparsable ones are
/// reported on stderr and ignored.
pub fn viewer_config() -> ViewerConfig {
    ViewerConfig {
        result_path: env_path(RESULT_ENV),
        initial_selection: env_parsed(SELECT_ENV),
        color_seed: env_parsed(COLOR_SEED_ENV),
        screenshot_path: env_path(SCREENSHOT_ENV),
        log_filter: env_string(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|raw| !raw.trim().is_empty())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env_string(key).map(PathBuf::from)
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = env_string(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("packviz: invalid value in {key}: {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 5] = [RESULT_ENV, SELECT_ENV, COLOR_SEED_ENV, SCREENSHOT_ENV, LOG_ENV];

    fn clear_all() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);
        clear_all();

        assert_eq!(viewer_config(), ViewerConfig::default());
    }

    #[test]
    fn all_variables_are_read() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);
        clear_all();

        std::env::set_var(RESULT_ENV, "demos/sample_result.json");
        std::env::set_var(SELECT_ENV, "2");
        std::env::set_var(COLOR_SEED_ENV, "42");
        std::env::set_var(SCREENSHOT_ENV, "out/view.png");
        std::env::set_var(LOG_ENV, "debug");

        let config = viewer_config();

        assert_eq!(
            config.result_path,
            Some(PathBuf::from("demos/sample_result.json"))
        );
        assert_eq!(config.initial_selection, Some(2));
        assert_eq!(config.color_seed, Some(42));
        assert_eq!(config.screenshot_path, Some(PathBuf::from("out/view.png")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);
        clear_all();

        std::env::set_var(SELECT_ENV, "first");
        std::env::set_var(COLOR_SEED_ENV, "-1");

        let config = viewer_config();

        assert_eq!(config.initial_selection, None);
        assert_eq!(config.color_seed, None);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);
        clear_all();

        std::env::set_var(RESULT_ENV, "  ");
        std::env::set_var(LOG_ENV, "");

        let config = viewer_config();

        assert_eq!(config.result_path, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
