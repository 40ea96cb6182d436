//! In-progress layout document: devices and the renderings placed on them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::DeviceId;
use crate::placeholder::PlaceholderKey;

/// One rendering instance as the client describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderingInstance {
    /// Stable unique identifier of the instance on the page.
    pub unique_id: Uuid,
    /// The rendering definition the instance points at. Clients may omit it
    /// for placeholders-only chrome requests.
    #[serde(default)]
    pub rendering_id: Option<Uuid>,
    /// The slot the instance occupies, exactly as the client recorded it
    /// (leading separator and all).
    pub placeholder: PlaceholderKey,
}

impl RenderingInstance {
    pub fn new(unique_id: Uuid, placeholder: impl Into<PlaceholderKey>) -> Self {
        Self {
            unique_id,
            rendering_id: None,
            placeholder: placeholder.into(),
        }
    }
}

/// The rendering collection of a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRenderings {
    /// Device identifier.
    pub id: DeviceId,
    /// Renderings placed on the device, in document order.
    #[serde(default)]
    pub renderings: Vec<RenderingInstance>,
}

impl DeviceRenderings {
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            renderings: Vec::new(),
        }
    }

    pub fn with_rendering(mut self, rendering: RenderingInstance) -> Self {
        self.renderings.push(rendering);
        self
    }
}

/// The whole submitted document: one rendering collection per device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub devices: Vec<DeviceRenderings>,
}

impl LayoutDocument {
    /// Strict parse of the JSON form. Fixture and API use; request handling
    /// goes through [`LayoutDocument::from_submission`] instead.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Lenient parse of an optional form submission.
    ///
    /// Absent input means the client did not submit a document. Malformed
    /// input is treated the same way, with a warning: an unreadable document
    /// must never fail the surrounding request.
    pub fn from_submission(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        match Self::parse(raw) {
            Ok(document) => Some(document),
            Err(error) => {
                tracing::warn!("ignoring malformed in-progress layout document: {error}");
                None
            }
        }
    }

    /// The rendering collection submitted for `device`, if any.
    pub fn device(&self, device: DeviceId) -> Option<&DeviceRenderings> {
        self.devices.iter().find(|d| d.id == device)
    }
}
