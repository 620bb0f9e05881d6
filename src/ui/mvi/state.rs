//! Base trait for view-model state in MVI architecture.

/// Marker trait for published state objects.
///
/// States should be:
/// - Immutable (Clone to hand out snapshots)
/// - Self-contained (everything a view needs to render)
/// - Comparable (PartialEq for suppressing unchanged snapshots)
/// - Defaulted to the initial state
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
