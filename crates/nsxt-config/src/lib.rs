//! Provider configuration for the NSX-T adapter.
//!
//! Layered loading (defaults, TOML file, `NSXT_*` environment), password
//! resolution (env var, keyring, plaintext), and translation into an
//! `NsxClient` plus the adapter's failure policies.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use nsxt_api::{BasicAuth, NsxClient, TlsMode, TransportConfig};
use nsxt_provider::{AdapterPolicy, DEFAULT_NSX_VERSION, ProfileLookupFailure, VersionProbeFailure};

/// Prefix for environment overrides, e.g. `NSXT_MANAGER_HOST`.
pub const ENV_PREFIX: &str = "NSXT_";

const KEYRING_SERVICE: &str = "nsxt-provider";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no {what} configured for manager '{host}'")]
    NoCredentials { what: &'static str, host: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to build manager client: {0}")]
    Client(#[from] nsxt_api::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// How the version probe reacts when node properties cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionProbeMode {
    /// Report `version_fallback`.
    #[default]
    Fallback,
    Propagate,
}

/// Provider settings after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Manager host name or URL (e.g. "nsxmgr.example.com").
    pub manager_host: Option<String>,

    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or `password_env`).
    pub password: Option<String>,

    /// Environment variable name holding the password.
    pub password_env: Option<String>,

    /// Path to a PEM CA bundle used to verify the manager.
    pub ca_file: Option<PathBuf>,

    #[serde(default)]
    pub allow_unverified_ssl: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub on_profile_lookup_failure: ProfileLookupFailure,

    #[serde(default)]
    pub on_version_probe_failure: VersionProbeMode,

    #[serde(default = "default_version_fallback")]
    pub version_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manager_host: None,
            username: None,
            password: None,
            password_env: None,
            ca_file: None,
            allow_unverified_ssl: false,
            timeout: default_timeout(),
            on_profile_lookup_failure: ProfileLookupFailure::default(),
            on_version_probe_failure: VersionProbeMode::default(),
            version_fallback: default_version_fallback(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_version_fallback() -> String {
    DEFAULT_NSX_VERSION.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vmware", "nsxt-provider").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("nsxt-provider");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Layer defaults, the TOML file at `path` (if present) and the environment.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
}

/// Load from the canonical config path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file plus environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading provider config");
    extract(&figment(path))
}

/// Extract and validate a `Config` from an already assembled figment.
pub fn extract(figment: &Figment) -> Result<Config, ConfigError> {
    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Validation & translation ────────────────────────────────────────

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.host()?;
        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        if self.version_fallback.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "version_fallback".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The configured manager host, rejecting a missing or blank value.
    pub fn host(&self) -> Result<&str, ConfigError> {
        match self.manager_host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => Ok(host),
            _ => Err(ConfigError::Validation {
                field: "manager_host".into(),
                reason: "must be set".into(),
            }),
        }
    }

    pub fn transport(&self) -> TransportConfig {
        let tls = if self.allow_unverified_ssl {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_file {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// Resolve the password: `password_env` var, then keyring, then plaintext.
    pub fn resolve_password(&self) -> Result<SecretString, ConfigError> {
        self.resolve_password_with(|name| std::env::var(name).ok(), keyring_password)
    }

    fn resolve_password_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
        keyring: impl Fn(&str, &str) -> Option<String>,
    ) -> Result<SecretString, ConfigError> {
        let host = self.host()?;

        // 1. Named env var
        if let Some(pw) = self.password_env.as_deref().and_then(&env) {
            return Ok(SecretString::from(pw));
        }

        // 2. System keyring
        if let Some(ref username) = self.username {
            if let Some(pw) = keyring(host, username) {
                return Ok(SecretString::from(pw));
            }
        }

        // 3. Plaintext in config
        if let Some(ref pw) = self.password {
            return Ok(SecretString::from(pw.clone()));
        }

        Err(ConfigError::NoCredentials {
            what: "password",
            host: host.into(),
        })
    }

    pub fn credentials(&self) -> Result<BasicAuth, ConfigError> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| ConfigError::NoCredentials {
                what: "username",
                host: self.manager_host.clone().unwrap_or_default(),
            })?;
        let password = self.resolve_password()?;
        Ok(BasicAuth::new(username, password))
    }

    /// Build an authenticated manager client.
    pub fn build_client(&self) -> Result<NsxClient, ConfigError> {
        let host = self.host()?;
        let auth = self.credentials()?;
        Ok(NsxClient::new(host, auth, &self.transport())?)
    }

    pub fn adapter_policy(&self) -> AdapterPolicy {
        let on_version_probe_failure = match self.on_version_probe_failure {
            VersionProbeMode::Fallback => VersionProbeFailure::Fallback(self.version_fallback.clone()),
            VersionProbeMode::Propagate => VersionProbeFailure::Propagate,
        };
        AdapterPolicy {
            on_profile_lookup_failure: self.on_profile_lookup_failure,
            on_version_probe_failure,
        }
    }
}

fn keyring_password(host: &str, username: &str) -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{username}@{host}")).ok()?;
    match entry.get_password() {
        Ok(pw) => Some(pw),
        Err(err) => {
            debug!(host, username, error = %err, "no keyring password");
            None
        }
    }
}
