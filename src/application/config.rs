use crate::domain::{LifeError, Pattern};
use thiserror::Error;

/// Errors raised while building a [`SimulationConfig`] from user input
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a non-negative integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Life(#[from] LifeError),
}

/// Everything needed to (re)build a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square grid
    pub size: usize,
    pub pattern: Pattern,
    /// Fixed RNG seed for reproducible random seeding; `None` uses the thread RNG
    pub seed: Option<u64>,
    pub updates_per_second: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            pattern: Pattern::Random,
            seed: None,
            updates_per_second: 10.0,
        }
    }
}

impl SimulationConfig {
    pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
    pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set playback speed, clamped to the supported range
    pub fn with_updates_per_second(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = updates_per_second
            .clamp(Self::MIN_UPDATES_PER_SECOND, Self::MAX_UPDATES_PER_SECOND);
        self
    }

    /// Parse positional `[SIZE] [PATTERN] [SEED]` arguments.
    /// Missing arguments keep their defaults; the pattern selector never fails.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(size) = args.next() {
            config.size = parse_number("size", size.as_ref())?;
        }
        if let Some(pattern) = args.next() {
            config.pattern = Pattern::from_selector(pattern.as_ref());
        }
        if let Some(seed) = args.next() {
            config.seed = Some(parse_number("seed", seed.as_ref())?);
        }

        if config.size == 0 {
            return Err(LifeError::InvalidDimension { width: 0, height: 0 }.into());
        }

        Ok(config)
    }
}

/// Parse a non-negative integer argument, naming the field on failure
pub fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.pattern, Pattern::Random);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_args_full() {
        let config = SimulationConfig::from_args(["64", "G", "9"]).unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.pattern, Pattern::GliderGun);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_from_args_empty_keeps_defaults() {
        let config = SimulationConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_unknown_pattern_normalizes_to_random() {
        let config = SimulationConfig::from_args(["20", "zebra"]).unwrap();
        assert_eq!(config.pattern, Pattern::Random);
    }

    #[test]
    fn test_bad_size_is_reported() {
        let err = SimulationConfig::from_args(["-3"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { field: "size", .. }));
    }

    #[test]
    fn test_zero_size_is_invalid_dimension() {
        let err = SimulationConfig::from_args(["0"]).unwrap_err();
        assert!(matches!(err, ConfigError::Life(LifeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(SimulationConfig::default().with_updates_per_second(500.0).updates_per_second, 60.0);
        assert_eq!(SimulationConfig::default().with_updates_per_second(0.0).updates_per_second, 1.0);
    }
}
