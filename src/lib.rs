//! page-chrome - Placeholder chrome resolution for page editing
//!
//! Resolves the editing-mode metadata ("chrome") for placeholder slots on
//! composed pages: display name, edit buttons, the set of rendering
//! definitions a slot accepts, and whether the slot is editable. Resolved
//! records are cached process-wide and validated against the client's
//! in-progress layout document before being served again.
//!
//! # Architecture Overview
//!
//! Chrome resolution is a small synchronous pipeline over three collaborator
//! seams:
//! - A [`services::LayoutService`] answers page-composition questions (an
//!   item's layout, the placeholder-settings lookups, which renderings are
//!   currently injected).
//! - A [`services::AllowedRenderings`] step computes the rendering
//!   definitions a slot accepts, and may rewrite the placeholder key while
//!   doing so.
//! - A [`services::ButtonSource`] supplies edit-button sets; the shipped
//!   implementation is the TOML-backed [`config::ButtonLibrary`].
//!
//! One [`ChromeResolver`] wires these together with a shared
//! [`cache::ChromeCache`]. Cached records are keyed by resolution *inputs*
//! (site, device, item, slot); because an editing session can rearrange the
//! page without touching those inputs, every cache hit is re-checked against
//! the submitted in-progress layout document before it is served
//! ([`cache::validity`]).
//!
//! ## Key Behaviors
//!
//! - **Ordered settings fallback**: device-aware, then item-generic, then
//!   legacy lookups; first match wins ([`settings`]).
//! - **Key rewriting**: the allowed-renderings step resolves wildcard slots;
//!   later lookups and the display name follow the rewritten key.
//! - **Fail-closed validity**: a submitted arrangement with no rendering
//!   under the slot rejects the cached record instead of trusting it.
//! - **Layered population**: builder passes append buttons and never clobber
//!   an `allowedRenderings` property an earlier pass set ([`chrome`]).
//!
//! # Core Modules
//!
//! - [`chrome`] - Record types, the builder, and the top-level pipeline
//! - [`settings`] - The ordered placeholder-settings fallback chain
//! - [`cache`] - Process-wide record cache and the validity check
//! - [`placeholder`] - The placeholder key model and containment relation
//! - [`layout`] - Serde model of the in-progress layout document
//! - [`services`] - Collaborator traits and their domain types
//! - [`context`] - Request-scoped state (site, device, form submission)
//! - [`config`] - `ChromeConfig` and the TOML button library
//! - [`core`] - Error types shared across the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use page_chrome::config::ChromeConfig;
//! use page_chrome::test_utils::{StaticAllowedRenderings, StaticButtons, StaticLayoutService};
//! use page_chrome::{ChromeCache, ChromeRequest, ChromeResolver, DeviceId, RequestContext};
//!
//! # fn main() -> page_chrome::ChromeResult<()> {
//! let resolver = ChromeResolver::new(
//!     Arc::new(StaticLayoutService::new()),
//!     Arc::new(StaticAllowedRenderings::new()),
//!     Arc::new(StaticButtons::new()),
//!     Arc::new(ChromeCache::new()),
//!     ChromeConfig::default(),
//! );
//!
//! let device = DeviceId::new(uuid::Uuid::new_v4());
//! let ctx = RequestContext::new("website", device);
//! let record = resolver.resolve_chrome(&ChromeRequest::new("main/col1"), &ctx)?;
//! assert_eq!(record.display_name, "col1");
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod cache;
pub mod chrome;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod layout;
pub mod placeholder;
pub mod services;
pub mod settings;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
pub mod test_utils;

pub use cache::{CacheEntry, CacheKey, ChromeCache};
pub use chrome::{ChromeData, ChromeDataBuilder, ChromeRequest, ChromeResolver, EditButton};
pub use config::{ButtonLibrary, ChromeConfig};
pub use context::{DeviceId, FormData, RequestContext};
pub use core::{ChromeError, ChromeResult};
pub use placeholder::PlaceholderKey;
pub use settings::{ResolvedSettings, SettingsResolver};
