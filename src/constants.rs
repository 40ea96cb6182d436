//! Shared constants used across the page-chrome crate.
//!
//! Wire-level names (form fields, record property keys, command markers) are
//! defined centrally so the builder, the validity checker, and the test
//! fixtures can never drift apart on spelling.

/// Form field under which the editing client submits the in-progress layout
/// document (a JSON string describing the current, not-yet-saved arrangement
/// of renderings per device).
pub const LAYOUT_FORM_FIELD: &str = "layout";

/// Marker that an edit-button action string carries a back-reference to a
/// specific rendering instance. The marker is always immediately followed by
/// the uppercase short id of the referenced rendering's unique id.
pub const REFERENCE_ID_MARKER: &str = "referenceId=";

/// Custom-property key holding the list of rendering-definition short ids
/// allowed on a placeholder. Written at most once per record; later builder
/// passes must not overwrite an existing value.
pub const ALLOWED_RENDERINGS_PROPERTY: &str = "allowedRenderings";

/// Custom-property key holding whether the placeholder is editable in the
/// current editing mode (a JSON bool).
pub const EDITABLE_PROPERTY: &str = "editable";

/// Configuration path of the edit-button set attached to placeholders that
/// are not pre-injected by a design or snippet.
pub const DEFAULT_PLACEHOLDER_BUTTONS_PATH: &str = "editing/default-placeholder-buttons";

/// Wildcard marker terminating a placeholder key that matches a family of
/// concrete slots (for example `main-*`).
pub const WILDCARD_SUFFIX: &str = "*";
