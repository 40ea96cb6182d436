//! Serde model of the client-submitted in-progress layout document.
//!
//! During an editing session the client posts the current (not yet persisted)
//! slot/rendering arrangement alongside each chrome request. Cache validity
//! checks it against cached back-reference buttons; see
//! [`crate::cache::validity`].

pub mod document;

pub use document::{DeviceRenderings, LayoutDocument, RenderingInstance};
