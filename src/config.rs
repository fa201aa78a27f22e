//! Configuration management for the resume tailor

use crate::error::{Result, TailorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub cache: CacheConfig,
    pub distribution: DistributionConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Cap on keywords extracted from one posting.
    pub max_keywords: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub max_keywords_per_bullet: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Advisory end-to-end latency target in milliseconds. Reported against,
    /// never enforced by early termination.
    pub target_latency_ms: u64,
    /// Advisory keyword-coverage goal for downstream consumers; the core
    /// does not compute it.
    pub target_coverage: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig { max_keywords: 35 },
            cache: CacheConfig {
                ttl_secs: 30 * 60,
                capacity: 100,
            },
            distribution: DistributionConfig {
                max_keywords_per_bullet: 3,
            },
            pipeline: PipelineConfig {
                target_latency_ms: 200,
                target_coverage: 0.8,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| TailorError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TailorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-tailor")
            .join("config.toml")
    }
}
