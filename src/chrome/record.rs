//! The chrome record: what resolution produces and the cache stores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ALLOWED_RENDERINGS_PROPERTY, EDITABLE_PROPERTY, REFERENCE_ID_MARKER};

/// One edit button offered on a placeholder's chrome.
///
/// A button whose `click` action contains the `referenceId=` marker carries a
/// back-reference to a specific rendering instance (its uppercase short id),
/// which ties the cached record to a concrete page arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditButton {
    /// Visible label.
    pub header: String,
    /// Icon path or theme identifier.
    #[serde(default)]
    pub icon: String,
    /// Client-side click action.
    pub click: String,
    /// Hover text.
    #[serde(default)]
    pub tooltip: String,
}

impl EditButton {
    pub fn new(
        header: impl Into<String>,
        icon: impl Into<String>,
        click: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            icon: icon.into(),
            click: click.into(),
            tooltip: tooltip.into(),
        }
    }

    /// Whether the click action carries a back-reference marker at all.
    pub fn has_back_reference(&self) -> bool {
        self.click.contains(REFERENCE_ID_MARKER)
    }

    /// Whether the click action back-references the rendering instance with
    /// the given uppercase short id.
    pub fn references(&self, short_id: &str) -> bool {
        self.click
            .contains(&format!("{REFERENCE_ID_MARKER}{short_id}"))
    }
}

/// Editing metadata resolved for one placeholder slot.
///
/// The record is mutable while the builder assembles it and immutable once
/// promoted into a cache entry. Custom properties layer: repeated population
/// passes add to the map but never clobber `allowedRenderings` once set
/// (see [`ChromeData::set_allowed_renderings_if_absent`]). The `editable`
/// flag is derived per pass and always overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChromeData {
    /// Display name shown in the editing surface. HTML-escaped by the time
    /// it lands here.
    #[serde(default)]
    pub display_name: String,
    /// Edit buttons, in presentation order.
    #[serde(default)]
    pub buttons: Vec<EditButton>,
    /// Free-form custom properties (`allowedRenderings`, `editable`, and
    /// whatever later population passes contribute).
    #[serde(default)]
    pub custom: BTreeMap<String, Value>,
}

impl ChromeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append buttons, preserving anything already present.
    pub fn add_buttons(&mut self, buttons: impl IntoIterator<Item = EditButton>) {
        self.buttons.extend(buttons);
    }

    /// Record the allowed rendering-definition id list, unless an earlier
    /// population pass already did.
    pub fn set_allowed_renderings_if_absent(&mut self, ids: &[String]) {
        if !self.custom.contains_key(ALLOWED_RENDERINGS_PROPERTY) {
            let list = Value::Array(ids.iter().cloned().map(Value::String).collect());
            self.custom.insert(ALLOWED_RENDERINGS_PROPERTY.to_string(), list);
        }
    }

    /// Record the editable flag. Unlike `allowedRenderings` this is derived
    /// state and each population pass overwrites it.
    pub fn set_editable(&mut self, editable: bool) {
        self.custom
            .insert(EDITABLE_PROPERTY.to_string(), Value::Bool(editable));
    }

    /// The recorded allowed rendering-definition ids, if any pass set them.
    pub fn allowed_renderings(&self) -> Option<&Value> {
        self.custom.get(ALLOWED_RENDERINGS_PROPERTY)
    }

    /// The recorded editable flag, if set.
    pub fn editable(&self) -> Option<bool> {
        self.custom.get(EDITABLE_PROPERTY).and_then(Value::as_bool)
    }

    /// Buttons whose click action carries a back-reference marker.
    pub fn back_reference_buttons(&self) -> impl Iterator<Item = &EditButton> {
        self.buttons.iter().filter(|b| b.has_back_reference())
    }

    /// Whether any button back-references a rendering instance.
    pub fn has_back_reference_buttons(&self) -> bool {
        self.back_reference_buttons().next().is_some()
    }

    /// A record carrying no information at all. Cached entries with an empty
    /// record are treated as misses rather than served.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.buttons.is_empty() && self.custom.is_empty()
    }
}
