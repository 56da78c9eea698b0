//! Engine configuration

/// Settings for a [`GuessEngine`](super::GuessEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Skip the previous round's solution when drawing a new one
    pub exclude_previous: bool,
    /// Fixed RNG seed for reproducible draws; seeded from the OS when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(exclude_previous: bool, seed: Option<u64>) -> Self {
        Self {
            exclude_previous,
            seed,
        }
    }

    /// Same settings with a fixed seed
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_previous_without_seed() {
        let config = GameConfig::default();
        assert!(config.exclude_previous);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn with_seed_keeps_other_settings() {
        let config = GameConfig::new(false, None).with_seed(9);
        assert!(!config.exclude_previous);
        assert_eq!(config.seed, Some(9));
    }
}
