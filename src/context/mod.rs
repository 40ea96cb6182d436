//! Request-scoped ambient state, passed explicitly.
//!
//! Chrome resolution never reads global state. Everything a request
//! contributes (the current site, the current device, the user's form
//! submission, and the request-local "rendering sources already resolved"
//! marker) travels in a [`RequestContext`] value handed to every operation
//! that needs it.
//!
//! The one form field the core cares about is the in-progress layout document
//! (see [`crate::layout`]): a JSON description of the current, unsaved
//! slot/rendering arrangement that editing clients post alongside chrome
//! requests. Its *presence* is meaningful to the cache validity check, so
//! [`RequestContext::in_progress_layout`] distinguishes "absent" from
//! "present but blank" (both count as not submitted).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::constants::LAYOUT_FORM_FIELD;

/// Identifier of the device (rendering channel) a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Wrap an existing device identifier.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for DeviceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A flat view of the user's form submission.
///
/// Only string fields are modeled; the core never needs anything richer.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// An empty submission (no fields at all).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw field lookup. `None` when the field was not submitted at all.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Everything the current request contributes to chrome resolution.
#[derive(Debug, Clone)]
pub struct RequestContext {
    site: String,
    device: DeviceId,
    form: FormData,
    rendering_sources_resolved: bool,
}

impl RequestContext {
    /// Context for a request on `site` targeting `device`, with no form
    /// submission and the rendering-sources marker unset.
    pub fn new(site: impl Into<String>, device: DeviceId) -> Self {
        Self {
            site: site.into(),
            device,
            form: FormData::new(),
            rendering_sources_resolved: false,
        }
    }

    /// Attach the user's form submission.
    pub fn with_form(mut self, form: FormData) -> Self {
        self.form = form;
        self
    }

    /// Record whether a later pipeline stage already enumerated rendering
    /// sources during this request. When unset, a validated cache hit
    /// re-runs the injected-rendering enumeration once (see
    /// [`crate::chrome::ChromeResolver`]).
    pub fn with_rendering_sources_resolved(mut self, resolved: bool) -> Self {
        self.rendering_sources_resolved = resolved;
        self
    }

    /// Name of the site this request renders under.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Device the request targets.
    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// The form submission carried by the request.
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// The request-local "rendering sources resolved" marker.
    pub fn rendering_sources_resolved(&self) -> bool {
        self.rendering_sources_resolved
    }

    /// The submitted in-progress layout document, if any.
    ///
    /// Returns `None` when the `layout` form field is absent *or* blank;
    /// both mean "nothing was submitted" to the validity check.
    pub fn in_progress_layout(&self) -> Option<&str> {
        self.form.get(LAYOUT_FORM_FIELD).filter(|raw| !raw.trim().is_empty())
    }
}
