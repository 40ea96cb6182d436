//! Core types for page-chrome.
//!
//! Currently this is the home of the crate-wide error type. Chrome resolution
//! has a deliberately small failure surface: argument preconditions,
//! configuration loading, and collaborator calls are the only things that can
//! fail. Every resolver fallback miss and every cache validity rejection is
//! ordinary control flow, not an error.

pub mod error;

pub use error::{ChromeError, ChromeResult};
