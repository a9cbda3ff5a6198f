//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`AxumContext`] carrying the capabilities handlers
/// depend on.
pub type AppState = Arc<AxumContext>;
