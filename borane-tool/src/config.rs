use std::path::PathBuf;
use std::time::Duration;

use borane_widget::{ReplyMode, ResponsePool, WidgetConfig, DEFAULT_REPLY_DELAY};
use serde::Deserialize;

use crate::error::BhError;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub reply_delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub replies: Option<Vec<String>>,
    pub backend_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub backend_url: Option<String>,
}

/// Fully resolved settings for a chat session.
#[derive(Debug)]
pub struct Settings {
    pub widget: WidgetConfig,
    pub seed: Option<u64>,
    pub backend_url: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("borane").join("config.toml"))
}

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("borane")
        .join("bh.log")
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

pub fn resolve_settings(config: Config, overrides: Overrides) -> Result<Settings, BhError> {
    let pool = match config.replies {
        Some(replies) => ResponsePool::new(replies)?,
        None => ResponsePool::default(),
    };

    let reply_delay = overrides
        .delay_ms
        .or(config.reply_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_REPLY_DELAY);

    let backend_url = overrides
        .backend_url
        .or(config.backend_url)
        .filter(|url| !url.trim().is_empty());

    let backend_url = if cfg!(feature = "backend") {
        backend_url
    } else {
        if let Some(url) = backend_url {
            tracing::warn!(%url, "Backend URL ignored: built without the backend feature");
        }
        None
    };

    let reply_mode = if backend_url.is_some() {
        ReplyMode::External
    } else {
        ReplyMode::Canned
    };

    Ok(Settings {
        widget: WidgetConfig {
            pool,
            reply_delay,
            reply_mode,
        },
        seed: overrides.seed.or(config.seed),
        backend_url,
    })
}

pub fn resolve_log_file(config: &Config, cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(default_log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use borane_widget::{WidgetError, DEFAULT_REPLIES};

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            reply_delay_ms = 250
            seed = 42
            replies = ["one", "two"]
            log_file = "/tmp/bh.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.reply_delay_ms, Some(250));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.replies, Some(vec!["one".to_string(), "two".to_string()]));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bh.log")));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        let settings = resolve_settings(config, Overrides::default()).unwrap();

        assert_eq!(settings.widget.reply_delay, Duration::from_millis(1000));
        assert_eq!(settings.widget.pool.len(), DEFAULT_REPLIES.len());
        assert_eq!(settings.widget.reply_mode, ReplyMode::Canned);
        assert_eq!(settings.seed, None);
        assert!(settings.backend_url.is_none());
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config {
            reply_delay_ms: Some(250),
            seed: Some(1),
            ..Config::default()
        };
        let overrides = Overrides {
            delay_ms: Some(10),
            seed: Some(2),
            ..Overrides::default()
        };
        let settings = resolve_settings(config, overrides).unwrap();

        assert_eq!(settings.widget.reply_delay, Duration::from_millis(10));
        assert_eq!(settings.seed, Some(2));
    }

    #[test]
    fn log_file_resolution() {
        let config = Config {
            log_file: Some(PathBuf::from("from-file.log")),
            ..Config::default()
        };
        assert_eq!(
            resolve_log_file(&config, Some(PathBuf::from("from-cli.log"))),
            PathBuf::from("from-cli.log")
        );
        assert_eq!(resolve_log_file(&config, None), PathBuf::from("from-file.log"));
        assert_eq!(resolve_log_file(&Config::default(), None), default_log_path());
    }

    #[test]
    fn empty_reply_list_rejected() {
        let config = Config {
            replies: Some(vec![]),
            ..Config::default()
        };
        let err = resolve_settings(config, Overrides::default()).unwrap_err();
        assert!(matches!(err, BhError::Widget(WidgetError::EmptyPool)));
    }

    #[test]
    fn blank_backend_url_ignored() {
        let overrides = Overrides {
            backend_url: Some("  ".to_string()),
            ..Overrides::default()
        };
        let settings = resolve_settings(Config::default(), overrides).unwrap();
        assert!(settings.backend_url.is_none());
        assert_eq!(settings.widget.reply_mode, ReplyMode::Canned);
    }

    #[cfg(not(feature = "backend"))]
    #[test]
    fn backend_url_needs_feature() {
        let overrides = Overrides {
            backend_url: Some("http://localhost:5000/get_response".to_string()),
            ..Overrides::default()
        };
        let settings = resolve_settings(Config::default(), overrides).unwrap();
        assert!(settings.backend_url.is_none());
        assert_eq!(settings.widget.reply_mode, ReplyMode::Canned);
    }

    #[cfg(feature = "backend")]
    #[test]
    fn backend_url_switches_to_external_replies() {
        let overrides = Overrides {
            backend_url: Some("http://localhost:5000/get_response".to_string()),
            ..Overrides::default()
        };
        let settings = resolve_settings(Config::default(), overrides).unwrap();
        assert_eq!(settings.widget.reply_mode, ReplyMode::External);
    }
}
