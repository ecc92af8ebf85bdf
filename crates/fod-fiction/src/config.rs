//! Configuration for a play session.

use std::time::Duration;

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Print passages at once and skip "Press Enter" pauses.
    pub fast: bool,
    /// RNG seed for reproducible stat rolls; random when unset.
    pub seed: Option<u64>,
    /// Delay between characters when narrating, in milliseconds.
    pub delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fast: false,
            seed: None,
            delay_ms: 30,
        }
    }
}

impl GameConfig {
    /// Enable or disable fast mode.
    pub fn with_fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the narration delay per character.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The narration delay per character.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
