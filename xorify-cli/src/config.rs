//! Configuration module

use crate::error::CliResult;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use xorify_engine::{EngineConfig, LengthPolicy};

/// Largest accepted chunk size in KiB (1 GiB)
pub const MAX_CHUNK_KB: u32 = 1024 * 1024;

/// CLI configuration structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct XorifyConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineSection,
}

/// Engine-related configuration
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    /// Chunk size read from each input per iteration (KiB)
    pub chunk_kb: u32,

    /// Zero-pad the shorter input instead of stopping at it
    pub pad: bool,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            chunk_kb: 64,
            pad: false,
        }
    }
}

impl XorifyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        let config: Self = toml::from_str(content)?;
        check_chunk_kb(config.engine.chunk_kb)?;
        Ok(config)
    }

    /// Engine configuration described by this file
    pub fn engine_config(&self) -> EngineConfig {
        let policy = if self.engine.pad {
            LengthPolicy::ZeroPad
        } else {
            LengthPolicy::Truncate
        };
        EngineConfig::default()
            .with_chunk_size(chunk_bytes(self.engine.chunk_kb))
            .with_length_policy(policy)
    }
}

/// Chunk size in bytes for a size in KiB
pub fn chunk_bytes(chunk_kb: u32) -> usize {
    chunk_kb as usize * 1024
}

fn check_chunk_kb(chunk_kb: u32) -> CliResult<()> {
    if chunk_kb == 0 || chunk_kb > MAX_CHUNK_KB {
        bail!("engine.chunk_kb must be between 1 and {MAX_CHUNK_KB}, got {chunk_kb}");
    }
    Ok(())
}
