//! AETHER Core — view identifiers, navigation state and static dashboard content.
//!
//! This crate holds everything the front-ends agree on:
//! - The closed set of dashboard views and their title/subtitle metadata
//! - The ordered sidebar navigation entries
//! - The selection holder (`Navigator`) owned by the root UI state
//! - Hardcoded demo content for the shell chrome and all five panels

pub mod demo;
pub mod error;
pub mod navigation;
pub mod shell;
pub mod view;

pub use error::AetherError;
pub use navigation::Navigator;
pub use view::{resolve_metadata, NavEntry, ViewId, ViewMeta, NAV_ENTRIES};
