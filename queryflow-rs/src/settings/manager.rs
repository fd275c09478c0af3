//! Settings manager

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::latency::Latency;
use crate::random::RandomSource;
use crate::settings::types::{Settings, SettingsPatch};

/// Single settings object, replaced on update
pub struct SettingsManager {
    original: Settings,
    current: Arc<RwLock<Settings>>,
    latency: Latency,
    random: Arc<dyn RandomSource>,
}

impl SettingsManager {
    pub fn new(original: Settings, latency: Latency, random: Arc<dyn RandomSource>) -> Self {
        Self {
            current: Arc::new(RwLock::new(original.clone())),
            original,
            latency,
            random,
        }
    }

    /// Copy of the current settings
    pub async fn get(&self) -> Settings {
        self.latency
            .simulate(self.latency.ranges().settings_get, self.random.as_ref())
            .await;

        self.current.read().await.clone()
    }

    /// Shallow-merge `patch` and return the merged copy
    pub async fn update(&self, patch: SettingsPatch) -> Settings {
        self.latency
            .simulate(self.latency.ranges().settings_update, self.random.as_ref())
            .await;

        let mut current = self.current.write().await;
        let mut merged = current.clone();
        merged.merge(patch);
        *current = merged.clone();

        info!("Settings updated");
        merged
    }

    /// Restore the original settings
    pub async fn reset(&self) -> Settings {
        self.latency
            .simulate(self.latency.ranges().settings_reset, self.random.as_ref())
            .await;

        let mut current = self.current.write().await;
        *current = self.original.clone();

        info!("Settings reset to defaults");
        current.clone()
    }
}
