use crate::errors::ServerError;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

pub const SETTINGS_FILE: &str = "dashboard.toml";
const ENV_PREFIX: &str = "DASHBOARD__";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub max_workers: usize,
    /// Base URL of the backend exposing `/tours/seller`.
    pub tours_api_base: String,
    /// `None` leaves the tours request unbounded.
    pub tours_timeout: Option<Duration>,
    /// How long a worker holds the tours fragment request open before
    /// answering "still loading" and letting the browser ask again.
    pub tours_fragment_wait: Duration,
    /// Where the listing form, assistant and listing pages live.
    /// Navigation stays relative to this server when unset.
    pub frontend_base_url: Option<String>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_path: "dashboard.sqlite3".into(),
            max_workers: 8,
            tours_api_base: "http://127.0.0.1:8000/api".into(),
            tours_timeout: None,
            tours_fragment_wait: Duration::from_secs(5),
            frontend_base_url: None,
            log_filter: "info".into(),
        }
    }
}

/// Shape of `dashboard.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    database_path: Option<String>,
    max_workers: Option<usize>,
    tours_api_base: Option<String>,
    tours_timeout_secs: Option<u64>,
    tours_fragment_wait_secs: Option<u64>,
    frontend_base_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `dashboard.toml` if present, then `DASHBOARD__*` env vars.
pub fn load_settings() -> Result<Settings, ServerError> {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    Settings::from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

impl Settings {
    pub fn from_sources<F>(file: Option<&str>, env: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = file {
            let cfg: FileSettings = toml::from_str(raw)
                .map_err(|e| ServerError::Config(format!("{SETTINGS_FILE}: {e}")))?;
            settings.apply_file(cfg)?;
        }

        let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("BIND_ADDR") {
            settings.bind_addr = parse_addr(&v)?;
        }
        if let Some(v) = var("DATABASE_PATH") {
            settings.database_path = v;
        }
        if let Some(v) = var("MAX_WORKERS") {
            settings.max_workers = v
                .parse()
                .map_err(|e| ServerError::Config(format!("MAX_WORKERS={v}: {e}")))?;
        }
        if let Some(v) = var("TOURS_API_BASE") {
            settings.tours_api_base = v;
        }
        if let Some(v) = var("TOURS_TIMEOUT_SECS") {
            let secs: u64 = v
                .parse()
                .map_err(|e| ServerError::Config(format!("TOURS_TIMEOUT_SECS={v}: {e}")))?;
            settings.tours_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(v) = var("TOURS_FRAGMENT_WAIT_SECS") {
            let secs: u64 = v
                .parse()
                .map_err(|e| ServerError::Config(format!("TOURS_FRAGMENT_WAIT_SECS={v}: {e}")))?;
            settings.tours_fragment_wait = Duration::from_secs(secs);
        }
        if let Some(v) = var("FRONTEND_BASE_URL") {
            settings.frontend_base_url = Some(v);
        }
        if let Some(v) = var("LOG_FILTER") {
            settings.log_filter = v;
        }

        settings.validate()?;
        Ok(settings)
    }

    fn apply_file(&mut self, cfg: FileSettings) -> Result<(), ServerError> {
        if let Some(v) = cfg.bind_addr {
            self.bind_addr = parse_addr(&v)?;
        }
        if let Some(v) = cfg.database_path {
            self.database_path = v;
        }
        if let Some(v) = cfg.max_workers {
            self.max_workers = v;
        }
        if let Some(v) = cfg.tours_api_base {
            self.tours_api_base = v;
        }
        if let Some(secs) = cfg.tours_timeout_secs {
            self.tours_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = cfg.tours_fragment_wait_secs {
            self.tours_fragment_wait = Duration::from_secs(secs);
        }
        if let Some(v) = cfg.frontend_base_url {
            self.frontend_base_url = Some(v);
        }
        if let Some(v) = cfg.log_filter {
            self.log_filter = v;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ServerError> {
        if self.tours_fragment_wait.is_zero() {
            return Err(ServerError::Config(
                "tours_fragment_wait_secs must be at least 1".into(),
            ));
        }
        if self.max_workers == 0 {
            return Err(ServerError::Config("max_workers must be at least 1".into()));
        }
        url::Url::parse(&self.tours_api_base)
            .map_err(|e| ServerError::Config(format!("tours_api_base: {e}")))?;
        if let Some(base) = &self.frontend_base_url {
            url::Url::parse(base)
                .map_err(|e| ServerError::Config(format!("frontend_base_url: {e}")))?;
        }
        Ok(())
    }
}

fn parse_addr(raw: &str) -> Result<SocketAddr, ServerError> {
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("bind_addr {raw:?}: {e}")))
}
