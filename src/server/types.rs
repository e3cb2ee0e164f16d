use crate::core::labels::LabelPicker;
use crate::core::latency::SimulatedLatency;
use crate::core::storage::UploadStore;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub struct AppState {
    pub labels: LabelPicker,
    pub latency: SimulatedLatency,
    // Some only when persistence is enabled
    pub store: Option<UploadStore>,
}

/// One request's file payload, held in memory for the duration of the request.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

// Response structure
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DetectResponse {
    pub detected_plant: String,
}

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppState {
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self, anyhow::Error> {
        let labels = match config.label_seed {
            Some(seed) => LabelPicker::with_seed(config.labels.clone(), seed),
            None => LabelPicker::from_entropy(config.labels.clone()),
        };

        tracing::info!(labels = ?labels.labels().as_slice(), "label set loaded");

        let latency = if config.simulated_latency.is_zero() {
            tracing::info!("simulated latency disabled");
            SimulatedLatency::disabled()
        } else {
            SimulatedLatency::new(config.simulated_latency)
        };

        let store = if config.persist_uploads {
            let store = UploadStore::init(&config.uploads_dir).await?;
            tracing::info!(dir = %store.dir().display(), "persisting uploads");
            Some(store)
        } else {
            None
        };

        Ok(Self {
            labels,
            latency,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn zero_latency_disables_the_wait() {
        let config = AppConfig {
            simulated_latency: Duration::ZERO,
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config).await.unwrap();
        assert_eq!(state.latency, SimulatedLatency::disabled());
        assert!(state.store.is_none());
    }

    #[tokio::test]
    async fn configured_latency_is_kept() {
        let state = AppState::from_config(&AppConfig::default()).await.unwrap();
        assert_eq!(
            state.latency,
            SimulatedLatency::new(Duration::from_millis(1500))
        );
    }
}
