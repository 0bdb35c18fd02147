//! Pipeline configuration
//!
//! The minimal knobs the encoding pipeline exposes. Everything else
//! (channel map, session metadata) is data, not configuration, and is
//! passed to the pipeline explicitly.

use serde::{Deserialize, Serialize};

/// Configuration for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Cap on the number of input rows processed (None = all rows).
    /// Applied before frequency estimation, so a cap of 1 also forces
    /// the default sample rate.
    #[serde(default)]
    pub max_rows: Option<usize>,

    /// Base for channel id assignment
    #[serde(default = "default_id_base")]
    pub id_base: u32,

    /// Input column holding the timestamp used for rate estimation
    #[serde(default = "default_time_column")]
    pub time_column: usize,
}

fn default_id_base() -> u32 {
    crate::channels::DEFAULT_ID_BASE
}

fn default_time_column() -> usize {
    1
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_rows: None,
            id_base: default_id_base(),
            time_column: default_time_column(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: cap the number of rows processed
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Builder method: set the channel id base
    pub fn with_id_base(mut self, id_base: u32) -> Self {
        self.id_base = id_base;
        self
    }

    /// Builder method: set the timestamp column
    pub fn with_time_column(mut self, time_column: usize) -> Self {
        self.time_column = time_column;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::new();
        assert_eq!(config.max_rows, None);
        assert_eq!(config.id_base, 8000);
        assert_eq!(config.time_column, 1);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_max_rows(5)
            .with_id_base(100)
            .with_time_column(0);

        assert_eq!(config.max_rows, Some(5));
        assert_eq!(config.id_base, 100);
        assert_eq!(config.time_column, 0);
    }
}
