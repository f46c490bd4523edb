//! Shared configuration for the club WiFi backend.
//!
//! TOML file + `CLUBWIFI_*` env overrides via figment, secret handling,
//! and translation into `clubwifi_api::TransportConfig` for each
//! collaborator.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use clubwifi_api::{TlsMode, TransportConfig};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "clubwifi.toml";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub router: RouterConfig,
    #[serde(default)]
    pub membership: MembershipConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8000
}

/// MikroTik router connection settings.
#[derive(Debug, Deserialize)]
pub struct RouterConfig {
    /// Router hostname or IP; a bare host gets an `https://` scheme.
    pub host: String,
    /// API account on the router (NOT a hotspot user).
    pub username: String,
    pub password: SecretString,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Routers ship self-signed certs, so the default accepts them.
    #[serde(default = "default_router_tls")]
    pub tls: TlsSetting,
}

/// Membership API settings.
#[derive(Debug, Deserialize)]
pub struct MembershipConfig {
    #[serde(default = "default_membership_url")]
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header when present.
    #[serde(default)]
    pub token: Option<SecretString>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            base_url: default_membership_url(),
            token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_membership_url() -> String {
    "https://tapi.lhu.edu.vn/nema/auth".into()
}
fn default_router_tls() -> TlsSetting {
    TlsSetting::AcceptInvalid
}

/// TLS verification setting, as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TlsSetting {
    System,
    AcceptInvalid,
    CustomCa { path: PathBuf },
}

impl From<TlsSetting> for TlsMode {
    fn from(setting: TlsSetting) -> Self {
        match setting {
            TlsSetting::System => TlsMode::System,
            TlsSetting::AcceptInvalid => TlsMode::DangerAcceptInvalid,
            TlsSetting::CustomCa { path } => TlsMode::CustomCa(path),
        }
    }
}

// ── Loading ─────────────────────────────────────────────────────────

impl Config {
    /// Load configuration from a TOML file with `CLUBWIFI_*` env
    /// overrides layered on top (nested keys split on `__`, e.g.
    /// `CLUBWIFI_ROUTER__PASSWORD`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config: Config = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("CLUBWIFI_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.router.host.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "router.host".into(),
                reason: "must not be empty".into(),
            });
        }
        self.router.base_url()?;
        self.membership.base_url()?;
        Ok(())
    }
}

impl RouterConfig {
    /// The router base URL. A bare hostname or IP is given an `https`
    /// scheme; an explicit scheme is kept as written.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let text = if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        };
        Url::parse(&text).map_err(|e| ConfigError::Validation {
            field: "router.host".into(),
            reason: e.to_string(),
        })
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.clone().into(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl MembershipConfig {
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::Validation {
            field: "membership.base_url".into(),
            reason: e.to_string(),
        })
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::System,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn minimal_config_fills_defaults() {
        let file = write_config(
            r#"
            [router]
            host = "192.168.88.1"
            username = "wifiapi"
            password = "wifilogin"
            "#,
        );

        let config = Config::load(Some(file.path())).expect("load");

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.router.timeout_secs, 30);
        assert_eq!(
            config.membership.base_url,
            "https://tapi.lhu.edu.vn/nema/auth"
        );
        assert!(matches!(config.router.tls, TlsSetting::AcceptInvalid));
    }

    #[test]
    fn bare_router_host_gets_https_scheme() {
        let file = write_config(
            r#"
            [router]
            host = "192.168.88.1"
            username = "wifiapi"
            password = "wifilogin"
            "#,
        );

        let config = Config::load(Some(file.path())).expect("load");
        assert_eq!(
            config.router.base_url().expect("url").as_str(),
            "https://192.168.88.1/"
        );
    }

    #[test]
    fn explicit_scheme_kept() {
        let file = write_config(
            r#"
            [router]
            host = "http://router.club.lan:8080"
            username = "wifiapi"
            password = "wifilogin"
            "#,
        );

        let config = Config::load(Some(file.path())).expect("load");
        let url = config.router.base_url().expect("url");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn empty_router_host_rejected() {
        let file = write_config(
            r#"
            [router]
            host = ""
            username = "wifiapi"
            password = "wifilogin"
            "#,
        );

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn tls_setting_parses_kebab_case() {
        let file = write_config(
            r#"
            [router]
            host = "192.168.88.1"
            username = "wifiapi"
            password = "wifilogin"
            tls = "system"
            "#,
        );

        let config = Config::load(Some(file.path())).expect("load");
        assert!(matches!(config.router.tls, TlsSetting::System));
    }
}
