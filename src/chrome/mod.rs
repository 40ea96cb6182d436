//! Chrome record assembly and the top-level resolution pipeline.
//!
//! "Chrome" is the editing-mode metadata overlaid on a placeholder slot:
//! its display name, its edit buttons, which rendering definitions it
//! accepts, whether it is editable at all. This module owns the record type
//! ([`ChromeData`] / [`EditButton`]), the builder that assembles records
//! from resolved settings ([`ChromeDataBuilder`]), and the cached pipeline
//! callers actually talk to ([`ChromeResolver`]).

pub mod builder;
pub mod record;
pub mod resolve;

pub use builder::ChromeDataBuilder;
pub use record::{ChromeData, EditButton};
pub use resolve::{ChromeRequest, ChromeResolver};
