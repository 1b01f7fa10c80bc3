//! Errors raised by the core crate.

use thiserror::Error;

/// Errors from parsing user-supplied identifiers.
///
/// Navigation itself cannot fail: the selection is a closed enum and every
/// lookup over it is total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AetherError {
    #[error("unknown view \"{0}\" (expected one of: console, agents, workflows, analytics, settings)")]
    UnknownView(String),
}
