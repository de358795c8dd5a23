//! Common error types for pocket-guardian.
//!
//! This module provides the errors raised by the catalog and the scan
//! simulator.

use thiserror::Error;

/// A result type using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur while resolving or scanning items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The mode is unknown and no custom item list was supplied.
    #[error("unknown mode '{0}' and no custom items supplied")]
    InvalidMode(String),

    /// A catalog mode was defined without any items.
    #[error("mode '{0}' must list at least one item")]
    EmptyMode(String),
}
