use crate::core::labels::LabelSet;
use crate::utils::constants::{
    DEFAULT_PORT, DEFAULT_SIMULATED_LATENCY_MS, DEFAULT_UPLOADS_DIR, SERVER_REQUEST_BODY_LIMIT,
    SERVER_REQUEST_TIMEOUT_SECS,
};
use crate::utils::get_env::{env_flag, env_var_to_vec, parse_env_var};
use anyhow::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Process-wide settings, read once at startup and injected into the handler state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub persist_uploads: bool,
    pub uploads_dir: PathBuf,
    pub simulated_latency: Duration,
    pub labels: LabelSet,
    pub label_seed: Option<u64>,
    pub request_body_limit: usize,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            persist_uploads: false,
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
            labels: LabelSet::default(),
            label_seed: None,
            request_body_limit: SERVER_REQUEST_BODY_LIMIT,
            request_timeout: Duration::from_secs(SERVER_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_prefixed_env("")
    }

    // every key is read as `<prefix><KEY>`
    pub fn from_prefixed_env(prefix: &str) -> Result<Self, Error> {
        let key = |name: &str| format!("{}{}", prefix, name);
        let defaults = Self::default();

        let labels = match env_var_to_vec(&key("PLANT_LABELS")) {
            custom if custom.is_empty() => defaults.labels,
            custom => LabelSet::new(custom)?,
        };

        Ok(Self {
            port: parse_env_var(&key("PORT"))?.unwrap_or(defaults.port),
            persist_uploads: env_flag(&key("PERSIST_UPLOADS"))?
                .unwrap_or(defaults.persist_uploads),
            uploads_dir: parse_env_var(&key("UPLOADS_DIR"))?.unwrap_or(defaults.uploads_dir),
            simulated_latency: parse_env_var(&key("SIMULATED_LATENCY_MS"))?
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
            labels,
            label_seed: parse_env_var(&key("LABEL_SEED"))?,
            request_body_limit: parse_env_var(&key("REQUEST_BODY_LIMIT"))?
                .unwrap_or(defaults.request_body_limit),
            request_timeout: parse_env_var(&key("REQUEST_TIMEOUT_SECS"))?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }
}
