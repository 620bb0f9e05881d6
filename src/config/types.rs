use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
}

/// Game and view-model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay before the computer moves, in milliseconds (default: 2000).
    #[serde(default = "default_opponent_think_delay_ms")]
    pub opponent_think_delay_ms: u64,
    /// Published states buffered per subscriber (default: 64).
    #[serde(default = "default_state_buffer")]
    pub state_buffer: usize,
    /// Computer move selection (default: random).
    #[serde(default)]
    pub strategy: StrategyKind,
}

fn default_opponent_think_delay_ms() -> u64 {
    2000
}

fn default_state_buffer() -> usize {
    64
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_think_delay_ms: default_opponent_think_delay_ms(),
            state_buffer: default_state_buffer(),
            strategy: StrategyKind::default(),
        }
    }
}
