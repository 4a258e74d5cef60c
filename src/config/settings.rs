use std::env;
use std::path::PathBuf;

use crate::constants::timeouts::{
    DEFAULT_MAX_COMMENT_LENGTH, DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS,
};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Session snapshot holding the user's mute status
    pub mute_status_path: PathBuf,
    /// Optional recorded submission responses to replay
    pub responses_path: Option<PathBuf>,
    /// Offense age (seconds) under which the mute modal opens on mount
    pub offense_warning_window_seconds: i64,
    /// Comment length limit in characters
    pub max_comment_length: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        let mute_status_path = env::var("MUTE_STATUS_PATH")
            .map(PathBuf::from)
            .map_err(|_| Error::Config("MUTE_STATUS_PATH environment variable not set".into()))?;

        let responses_path = env::var("RESPONSES_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let offense_warning_window_seconds = env::var("OFFENSE_WARNING_WINDOW_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS);

        let max_comment_length = env::var("MAX_COMMENT_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_COMMENT_LENGTH);

        if offense_warning_window_seconds < 0 {
            return Err(Error::Config(
                "OFFENSE_WARNING_WINDOW_SECONDS must not be negative".into(),
            ));
        }

        Ok(Self {
            mute_status_path,
            responses_path,
            offense_warning_window_seconds,
            max_comment_length,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mute_status_path: PathBuf::new(),
            responses_path: None,
            offense_warning_window_seconds: DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: &[&str] = &[
        "MUTE_STATUS_PATH",
        "RESPONSES_PATH",
        "OFFENSE_WARNING_WINDOW_SECONDS",
        "MAX_COMMENT_LENGTH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    // Environment is process-wide, so every case runs in this one test
    #[test]
    fn test_from_env() {
        clear_env();
        assert!(matches!(Settings::from_env(), Err(Error::Config(_))));

        env::set_var("MUTE_STATUS_PATH", "session.json");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mute_status_path, PathBuf::from("session.json"));
        assert!(settings.responses_path.is_none());
        assert_eq!(
            settings.offense_warning_window_seconds,
            DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS
        );
        assert_eq!(settings.max_comment_length, DEFAULT_MAX_COMMENT_LENGTH);

        env::set_var("RESPONSES_PATH", "");
        env::set_var("OFFENSE_WARNING_WINDOW_SECONDS", "not a number");
        env::set_var("MAX_COMMENT_LENGTH", "280");
        let settings = Settings::from_env().unwrap();
        assert!(settings.responses_path.is_none());
        assert_eq!(
            settings.offense_warning_window_seconds,
            DEFAULT_OFFENSE_WARNING_WINDOW_SECONDS
        );
        assert_eq!(settings.max_comment_length, 280);

        env::set_var("RESPONSES_PATH", "responses.json");
        env::set_var("OFFENSE_WARNING_WINDOW_SECONDS", "300");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.responses_path, Some(PathBuf::from("responses.json")));
        assert_eq!(settings.offense_warning_window_seconds, 300);

        env::set_var("OFFENSE_WARNING_WINDOW_SECONDS", "-1");
        assert!(matches!(Settings::from_env(), Err(Error::Config(_))));

        clear_env();
    }
}
