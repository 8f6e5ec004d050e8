use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default shortest substring length
pub const DEFAULT_MIN_LEN: usize = 3;

/// Default longest substring length
pub const DEFAULT_MAX_LEN: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum substring length must be at least 1 (got {0})")]
    MinLenTooSmall(usize),

    #[error("Maximum substring length {max_len} is smaller than minimum length {min_len}")]
    InvalidLengthWindow { min_len: usize, max_len: usize },

    #[error("Thread count must be at least 1")]
    ZeroThreads,

    #[error("Candidate limit must be at least 1")]
    ZeroCandidateLimit,
}

/// Parameters for a signature run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Shortest candidate substring, in characters
    pub min_len: usize,

    /// Longest candidate substring, in characters
    pub max_len: usize,

    /// Forbid selecting two substrings where one contains the other
    pub non_overlap: bool,

    /// Dedicated worker thread count (global rayon pool when `None`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Upper bound on distinct candidates per catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_candidates: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            non_overlap: false,
            threads: None,
            max_candidates: None,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_lengths(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len,
            max_len,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn non_overlapping(mut self, non_overlap: bool) -> Self {
        self.non_overlap = non_overlap;
        self
    }

    /// Reject invalid parameters. Values are never clamped.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len < 1 {
            return Err(ConfigError::MinLenTooSmall(self.min_len));
        }
        if self.max_len < self.min_len {
            return Err(ConfigError::InvalidLengthWindow {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        if self.max_candidates == Some(0) {
            return Err(ConfigError::ZeroCandidateLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_min_len_zero_rejected() {
        let config = SolverConfig::with_lengths(0, 4);
        assert_eq!(config.validate(), Err(ConfigError::MinLenTooSmall(0)));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let config = SolverConfig::with_lengths(5, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLengthWindow {
                min_len: 5,
                max_len: 4
            })
        );
    }

    #[test]
    fn test_equal_bounds_allowed() {
        assert!(SolverConfig::with_lengths(4, 4).validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = SolverConfig::default();
        config.threads = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreads));

        let mut config = SolverConfig::default();
        config.max_candidates = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCandidateLimit));
    }
}
