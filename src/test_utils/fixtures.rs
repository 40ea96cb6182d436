//! Fixture builders for layout documents, form data, and buttons.

use uuid::Uuid;

use crate::chrome::EditButton;
use crate::constants::{LAYOUT_FORM_FIELD, REFERENCE_ID_MARKER};
use crate::context::{DeviceId, FormData};
use crate::layout::{DeviceRenderings, LayoutDocument, RenderingInstance};
use crate::utils::short_id;

/// Serialize a one-device layout document placing each `(unique_id, slot)`
/// pair on `device`.
pub fn layout_json(device: DeviceId, renderings: &[(Uuid, &str)]) -> String {
    let mut collection = DeviceRenderings::new(device);
    for (unique_id, slot) in renderings {
        collection = collection.with_rendering(RenderingInstance::new(*unique_id, *slot));
    }
    let document = LayoutDocument {
        devices: vec![collection],
    };
    serde_json::to_string(&document).expect("layout fixture serializes")
}

/// Form data carrying `raw` as the submitted in-progress layout document.
pub fn form_with_layout(raw: impl Into<String>) -> FormData {
    FormData::new().with_field(LAYOUT_FORM_FIELD, raw)
}

/// A button whose click action back-references the rendering instance
/// `unique_id`, the way edit buttons tie cached chrome to a page arrangement.
pub fn back_reference_button(unique_id: &Uuid) -> EditButton {
    EditButton::new(
        "Edit component",
        "apps/16x16/pencil.png",
        format!("webedit:edit({REFERENCE_ID_MARKER}{})", short_id(unique_id)),
        "Edit this component",
    )
}

/// A button with no back-reference.
pub fn plain_button(header: &str) -> EditButton {
    EditButton::new(
        header,
        "apps/16x16/add.png",
        "chrome:placeholder:addControl",
        "Add to here",
    )
}

/// The stock default placeholder button set used across tests.
pub fn default_buttons() -> Vec<EditButton> {
    vec![plain_button("Add to here")]
}
