//! Configuration types for the engine

/// Default chunk size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// What happens once one input runs out before the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Stop at the shorter input; output length is `min(len(A), len(B))`
    #[default]
    Truncate,
    /// Treat the shorter input as zero-padded; output length is
    /// `max(len(A), len(B))` and the longer input's tail is copied unchanged
    ZeroPad,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Bytes read from each input per lock-step iteration
    pub chunk_size: usize,
    /// Unequal-length handling
    pub length_policy: LengthPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            length_policy: LengthPolicy::Truncate,
        }
    }
}

impl EngineConfig {
    /// Configuration that processes one byte per iteration
    pub fn bytewise() -> Self {
        Self {
            chunk_size: 1,
            ..Self::default()
        }
    }

    /// Set the chunk size in bytes
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the length policy
    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }

    /// Chunk size actually used for buffers (never zero)
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.chunk_size, 64 * 1024);
        assert_eq!(config.length_policy, LengthPolicy::Truncate);
    }

    #[test]
    fn test_zero_chunk_size_is_clamped() {
        let config = EngineConfig::default().with_chunk_size(0);
        assert_eq!(config.chunk_size, 0);
        assert_eq!(config.effective_chunk_size(), 1);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::bytewise().with_length_policy(LengthPolicy::ZeroPad);
        assert_eq!(config.effective_chunk_size(), 1);
        assert_eq!(config.length_policy, LengthPolicy::ZeroPad);
    }
}
