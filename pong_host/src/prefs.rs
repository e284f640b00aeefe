//! Preference and configuration files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use game_core::{Config, Preferences};
use tracing::{info, warn};

/// Read preferences, falling back to defaults on any failure
pub fn load_preferences(path: Option<&Path>) -> Preferences {
    let Some(path) = path else {
        return Preferences::default();
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), %err, "preferences unreadable, using defaults");
            return Preferences::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(prefs) => {
            info!(path = %path.display(), ?prefs, "preferences loaded");
            prefs
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "preferences malformed, using defaults");
            Preferences::default()
        }
    }
}

/// Read a configuration document; missing fields keep their defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_preferences(None), Preferences::default());
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_preferences() {
        let file = write_temp(r#"{ "right_autoplay": true }"#);
        let prefs = load_preferences(Some(file.path()));
        assert!(prefs.right_autoplay);
        assert!(!prefs.left_autoplay);
        assert_eq!(prefs.volume, 0.5);
    }

    #[test]
    fn test_malformed_preferences_degrade() {
        let file = write_temp("{ left_autoplay: yes");
        assert_eq!(load_preferences(Some(file.path())), Preferences::default());
    }

    #[test]
    fn test_missing_preferences_degrade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert_eq!(load_preferences(Some(&path)), Preferences::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_temp(r#"{ "play_to": 3, "ball_speed": 320.0 }"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.play_to, 3);
        assert_eq!(config.ball_speed, 320.0);
        assert_eq!(config.paddle_speed, Config::default().paddle_speed);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let file = write_temp(r#"{ "play_to": 0 }"#);
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("play_to"));
    }
}
