use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::ReconnectPolicy;

/// Reconnect policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempts beyond this count are fatal.
    pub max_attempts: u32,
    /// Total retry time in seconds before giving up.
    pub max_elapsed_secs: u64,
    /// Backoff increment per attempt in milliseconds.
    pub step_ms: u64,
    /// Maximum backoff delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            max_elapsed_secs: 3600,
            step_ms: 100,
            max_delay_ms: 3000,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> ReconnectPolicy {
        ReconnectPolicy {
            max_attempts: self.max_attempts,
            max_elapsed: Duration::from_secs(self.max_elapsed_secs),
            step: Duration::from_millis(self.step_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

/// Connection settings loaded from `~/.config/kvdemo/config.toml`, then
/// overridden by `REDIS_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Logical database index.
    #[serde(default)]
    pub db: i64,
    /// Timeout for a single connect attempt.
    pub connect_timeout_secs: u64,
    /// Optional reconnect policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            username: None,
            password: None,
            db: 0,
            connect_timeout_secs: 5,
            retry: None,
        }
    }
}

impl StoreConfig {
    pub fn reconnect_policy(&self) -> ReconnectPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// `redis://[user][:password@]host:port/db` with credentials escaped.
    pub fn connection_url(&self) -> Result<String> {
        let mut url = url::Url::parse(&format!("redis://{}:{}/{}", self.host, self.port, self.db))
            .with_context(|| format!("invalid host {:?}", self.host))?;
        if let Some(user) = &self.username {
            url.set_username(user)
                .map_err(|()| anyhow!("cannot set username on {}", self.host))?;
        }
        if let Some(pass) = &self.password {
            url.set_password(Some(pass))
                .map_err(|()| anyhow!("cannot set password on {}", self.host))?;
        }
        Ok(url.into())
    }

    /// Connection URL with the password replaced, for logs.
    pub fn redacted_url(&self) -> String {
        let user = self.username.as_deref().unwrap_or("");
        match (self.username.is_some(), self.password.is_some()) {
            (_, true) => format!("redis://{}:***@{}:{}/{}", user, self.host, self.port, self.db),
            (true, false) => format!("redis://{}@{}:{}/{}", user, self.host, self.port, self.db),
            (false, false) => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    /// Apply `REDIS_HOST`, `REDIS_PORT`, `REDIS_USERNAME`, `REDIS_PASSWORD`, `REDIS_DB`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("REDIS_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("REDIS_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("REDIS_PORT is not a port number: {port:?}"))?;
        }
        if let Some(user) = lookup("REDIS_USERNAME") {
            self.username = Some(user).filter(|u| !u.is_empty());
        }
        if let Some(pass) = lookup("REDIS_PASSWORD") {
            self.password = Some(pass).filter(|p| !p.is_empty());
        }
        if let Some(db) = lookup("REDIS_DB") {
            self.db = db
                .trim()
                .parse()
                .with_context(|| format!("REDIS_DB is not a database index: {db:?}"))?;
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kvdemo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<StoreConfig> {
    if !path.exists() {
        let default_cfg = StoreConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    read_config(path)
}

/// Load configuration from `path`, or defaults when it does not exist.
/// Never writes to disk.
pub fn load_at_or_default(path: &Path) -> Result<StoreConfig> {
    if !path.exists() {
        return Ok(StoreConfig::default());
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<StoreConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: StoreConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, then apply environment overrides.
pub fn load() -> Result<StoreConfig> {
    let mut cfg = load_or_init_at(&config_path()?)?;
    cfg.apply_env_overrides()?;
    Ok(cfg)
}

/// Like [`load`], but leaves the filesystem untouched when no config file exists.
pub fn load_existing() -> Result<StoreConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kvdemo")?;
    let mut cfg = match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_at_or_default(&path)?,
        None => StoreConfig::default(),
    };
    cfg.apply_env_overrides()?;
    Ok(cfg)
}
