//! Utility modules for DOM access and display formatting.
//!
//! - [`dom`] - window/storage/hash helpers, scroll locking, removable
//!   event listeners
//! - [`format`] - address and timestamp formatting

pub mod dom;
pub mod format;
