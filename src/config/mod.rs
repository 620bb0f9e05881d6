//! Configuration file support.
//!
//! Configuration lives in `~/.config/tictactoe-vm/config.toml` (or the
//! platform equivalent). Every field is optional; a missing file means
//! defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GameConfig};
