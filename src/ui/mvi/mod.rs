//! Model-View-Intent (MVI) primitives.
//!
//! View-models in this crate are unidirectional:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                              │
//!    └──── forwarded UI events ─────┘
//! ```
//!
//! - **State**: immutable snapshot published to subscribers
//! - **Intent**: a tagged action, consumed exactly once
//! - **Reducer**: pure `(State, Intent) -> State` fold step

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
