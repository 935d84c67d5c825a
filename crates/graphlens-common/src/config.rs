// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use std::time::Duration;

/// Configuration for an analysis session.
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Sample process resident memory before and after each operation (default: true)
    pub sample_memory: bool,

    /// Publish completed operations through the `metrics` facade (default: true)
    pub record_metrics: bool,

    /// Operations slower than this are logged as warnings (default: 100ms)
    pub slow_operation_threshold: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_memory: true,
            record_metrics: true,
            slow_operation_threshold: Duration::from_millis(100),
        }
    }
}

impl AnalyzerConfig {
    /// Config with memory sampling and metrics publishing turned off.
    ///
    /// Telemetry records are still produced; their `memory_delta` is always zero.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            sample_memory: false,
            record_metrics: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert!(config.sample_memory);
        assert!(config.record_metrics);
        assert_eq!(config.slow_operation_threshold, Duration::from_millis(100));
    }

    #[test]
    fn test_quiet_keeps_threshold() {
        let config = AnalyzerConfig::quiet();
        assert!(!config.sample_memory);
        assert!(!config.record_metrics);
        assert_eq!(
            config.slow_operation_threshold,
            AnalyzerConfig::default().slow_operation_threshold
        );
    }
}
