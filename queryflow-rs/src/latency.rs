//! Artificial latency in front of every service operation

use std::time::Duration;

use crate::config::{LatencyConfig, LatencyRange};
use crate::random::RandomSource;

/// Per-operation delay table
#[derive(Debug, Clone)]
pub struct Latency {
    config: LatencyConfig,
}

impl Latency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// Nothing sleeps
    pub fn disabled() -> Self {
        Self::new(LatencyConfig::disabled())
    }

    pub fn ranges(&self) -> &LatencyConfig {
        &self.config
    }

    /// Duration drawn for one operation
    pub fn draw(&self, range: LatencyRange, random: &dyn RandomSource) -> Duration {
        if !self.config.enabled {
            return Duration::ZERO;
        }
        Duration::from_millis(random.between_u64(range.min_ms, range.max_ms))
    }

    /// Suspend the current task for one operation's delay
    pub async fn simulate(&self, range: LatencyRange, random: &dyn RandomSource) {
        let delay = self.draw(range, random);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_disabled_draws_zero() {
        let random = SequenceRandom::new(vec![0.5]);
        let latency = Latency::disabled();
        assert_eq!(
            latency.draw(latency.ranges().search, &random),
            Duration::ZERO
        );
    }

    #[test]
    fn test_draw_within_range() {
        let random = SequenceRandom::new(vec![0.0, 0.999]);
        let latency = Latency::default();
        let range = latency.ranges().search;
        assert_eq!(latency.draw(range, &random), Duration::from_millis(800));
        assert_eq!(latency.draw(range, &random), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_sleeps() {
        let random = SequenceRandom::new(vec![0.0]);
        let latency = Latency::default();
        let start = tokio::time::Instant::now();
        latency
            .simulate(LatencyRange::fixed(300), &random)
            .await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
