//! Boot-time configuration for the client.
//!
//! Every value has a default matching the page contract (`#app`, `token`,
//! `/`). A few of them can be overridden when the WASM bundle is built, through
//! `WRITER_*` environment variables read with `option_env!`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mount selector must not be empty")]
    EmptyAnchor,
    #[error("token parameter name must not be empty")]
    EmptyTokenParam,
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("landing path must be absolute, got '{0}'")]
    RelativeLandingPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// CSS selector of the element the application is mounted into.
    pub anchor: String,
    /// Query parameter carrying the authentication token.
    pub token_param: String,
    /// Durable storage key the token is written under.
    pub storage_key: String,
    /// Path the URL is rewritten to once the token has been consumed.
    pub landing_path: String,
    /// Path prefix of the backend API, relative to the page origin.
    pub api_base: String,
    /// Where the login page sends the user to start authentication.
    pub login_url: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            anchor: "#app".to_owned(),
            token_param: "token".to_owned(),
            storage_key: "token".to_owned(),
            landing_path: "/".to_owned(),
            api_base: "/api".to_owned(),
            login_url: "/api/auth/login".to_owned(),
        }
    }
}

impl BootConfig {
    /// Defaults overlaid with any `WRITER_API_BASE` / `WRITER_LOGIN_URL`
    /// values present when the bundle was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(option_env!("WRITER_API_BASE"), option_env!("WRITER_LOGIN_URL"))
    }

    fn with_overrides(mut self, api_base: Option<&str>, login_url: Option<&str>) -> Self {
        if let Some(api_base) = api_base.filter(|v| !v.is_empty()) {
            api_base.trim_end_matches('/').clone_into(&mut self.api_base);
        }
        if let Some(login_url) = login_url.filter(|v| !v.is_empty()) {
            login_url.clone_into(&mut self.login_url);
        }
        self
    }

    /// Rejects values that would make the boot sequence meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor.trim().is_empty() {
            return Err(ConfigError::EmptyAnchor);
        }
        if self.token_param.is_empty() {
            return Err(ConfigError::EmptyTokenParam);
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !self.landing_path.starts_with('/') {
            return Err(ConfigError::RelativeLandingPath(self.landing_path.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = BootConfig::default();
        assert_eq!(config.anchor, "#app");
        assert_eq!(config.token_param, "token");
        assert_eq!(config.storage_key, "token");
        assert_eq!(config.landing_path, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_trim_trailing_slash_and_skip_empty() {
        let config = BootConfig::default().with_overrides(Some("/v2/api/"), Some(""));
        assert_eq!(config.api_base, "/v2/api");
        assert_eq!(config.login_url, "/api/auth/login");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = BootConfig {
            anchor: "  ".to_owned(),
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(ConfigError::EmptyAnchor));

        let config = BootConfig {
            token_param: String::new(),
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(ConfigError::EmptyTokenParam));

        let config = BootConfig {
            storage_key: String::new(),
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(ConfigError::EmptyStorageKey));

        let config = BootConfig {
            landing_path: "home".to_owned(),
            ..Default::default()
        };
        assert_matches!(
            config.validate(),
            Err(ConfigError::RelativeLandingPath(path)) if path == "home"
        );
    }
}
