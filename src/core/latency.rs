use std::time::Duration;

/// Artificial delay standing in for model inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    duration: Duration,
}

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn wait(&self) {
        if self.duration.is_zero() {
            return;
        }
        tokio::time::sleep(self.duration).await;
    }
}
