//! # Runtime Configuration Module
//!
//! Router behaviour that a host may want to flip without code changes.
//!
//! ## Environment Variables
//!
//! ### `ALIEN_CLEAN_PATH`
//!
//! Normalise request paths (collapse `//`, resolve `.` and `..`) before
//! lookup. Accepts `true`/`false`/`1`/`0`. Default: `true`.
//!
//! ### `ALIEN_PARAM_HEADER`
//!
//! When set, extracted parameters are also written to this request header in
//! the flat `name:value,name:value` form, for handlers that read parameters
//! from headers (the legacy header is `_alien`). Default: unset.
//!
//! ### `ALIEN_STRICT_ROUTES`
//!
//! Reject a registration whose pattern lands on a trie position that already
//! holds a route. Without it the newer route silently shadows the older one.
//! Default: `false`.
//!
//! ## TOML
//!
//! The same keys can be embedded in a host's configuration file:
//!
//! ```rust
//! use alien_mux::runtime_config::RouterConfig;
//!
//! let cfg = RouterConfig::from_toml_str(r#"
//! clean_path = true
//! param_header = "_alien"
//! strict_routes = true
//! "#).unwrap();
//! assert_eq!(cfg.param_header.as_deref(), Some("_alien"));
//! ```

use std::env;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, RouterError};

/// Header name historically used to carry encoded parameters
pub const LEGACY_PARAM_HEADER: &str = "_alien";

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Normalise request paths before lookup (default: true)
    pub clean_path: bool,
    /// Also stash encoded parameters in this request header (default: none)
    pub param_header: Option<String>,
    /// Refuse duplicate registrations instead of shadowing (default: false)
    pub strict_routes: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            clean_path: true,
            param_header: None,
            strict_routes: false,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let param_header = match env::var("ALIEN_PARAM_HEADER") {
            Ok(val) if http::HeaderName::from_bytes(val.trim().as_bytes()).is_ok() => {
                Some(val.trim().to_string())
            }
            Ok(val) => {
                warn!(value = %val, "Ignoring ALIEN_PARAM_HEADER: not a valid header name");
                defaults.param_header
            }
            Err(_) => defaults.param_header,
        };
        RouterConfig {
            clean_path: env_flag("ALIEN_CLEAN_PATH").unwrap_or(defaults.clean_path),
            param_header,
            strict_routes: env_flag("ALIEN_STRICT_ROUTES").unwrap_or(defaults.strict_routes),
        }
    }

    /// Parse configuration from a TOML document; missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let cfg: RouterConfig =
            toml::from_str(source).map_err(|e| RouterError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.param_header {
            http::HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                RouterError::InvalidConfig(format!("'{name}' is not a valid header name"))
            })?;
        }
        Ok(())
    }
}

fn env_flag(key: &str) -> Option<bool> {
    parse_flag(&env::var(key).ok()?)
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RouterConfig::default();
        assert!(cfg.clean_path);
        assert!(cfg.param_header.is_none());
        assert!(!cfg.strict_routes);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_toml_partial_document() {
        let cfg = RouterConfig::from_toml_str("strict_routes = true").unwrap();
        assert!(cfg.strict_routes);
        assert!(cfg.clean_path);
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let err = RouterConfig::from_toml_str("bogus = 1").unwrap_err();
        assert!(matches!(err, RouterError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_rejects_bad_header_name() {
        let err = RouterConfig::from_toml_str("param_header = \"not a header\"").unwrap_err();
        assert!(matches!(err, RouterError::InvalidConfig(_)));
    }
}
