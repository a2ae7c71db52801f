//! # xykit Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the xykit library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all xykit operations
pub use crate::Error;

/// The result type used throughout xykit
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Reachability over caller-defined graphs
pub use crate::graph::{reachable, reachable_from_map};

/// DOT rendering and attribute helpers
pub use crate::graph::{dot_code, escape_dot, label_attrs, quote_dot, DotConfig};

// ================================================================================================
// Utilities
// ================================================================================================

/// Set type returned by reachability queries
pub use crate::utils::Set;

/// Text indentation
pub use crate::utils::indent;

/// Iterator extension methods
pub use crate::utils::SeqExt;
