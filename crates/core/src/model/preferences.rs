use thiserror::Error;
use url::Url;

//
// ─── THEME ─────────────────────────────────────────────────────────────────────
//

/// Color theme preference. The only piece of state that survives a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stable key used for persistence and the root CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parses a persisted value, falling back to the default for anything
    /// unknown.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        match raw {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

//
// ─── BACKEND SETTINGS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendSettingsError {
    #[error("invalid backend base URL: {raw}")]
    InvalidBaseUrl { raw: String },
}

/// Validated location of the assessment backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    base_url: String,
}

impl BackendSettings {
    /// Validate and normalize a base URL (trailing slashes stripped).
    ///
    /// # Errors
    ///
    /// Returns `BackendSettingsError::InvalidBaseUrl` when the value does
    /// not parse as an absolute URL.
    pub fn new(raw: &str) -> Result<Self, BackendSettingsError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if Url::parse(trimmed).is_err() {
            return Err(BackendSettingsError::InvalidBaseUrl {
                raw: raw.to_string(),
            });
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_and_defaults_dark() {
        assert_eq!(Theme::from_persisted("light"), Theme::Light);
        assert_eq!(Theme::from_persisted("dark"), Theme::Dark);
        assert_eq!(Theme::from_persisted("solarized"), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn backend_settings_normalize_trailing_slash() {
        let settings = BackendSettings::new("http://localhost:8000/").unwrap();
        assert_eq!(settings.base_url(), "http://localhost:8000");
    }

    #[test]
    fn backend_settings_reject_relative_urls() {
        let err = BackendSettings::new("not a url").unwrap_err();
        assert!(matches!(err, BackendSettingsError::InvalidBaseUrl { .. }));
    }
}
