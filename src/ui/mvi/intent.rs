//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User events forwarded from a UI (clicks, key presses)
/// - Actions produced internally (timers, automated players)
///
/// Intents are ephemeral: each one is folded into the state once and dropped.
pub trait Intent: Send + 'static {}
