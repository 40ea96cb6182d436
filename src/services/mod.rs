//! Collaborator seams: the services chrome resolution consumes.
//!
//! The core treats everything that touches the content store or the wider
//! composition pipeline as an external collaborator behind a trait:
//!
//! - [`LayoutService`] - page-composition lookups: an item's layout identity,
//!   the three placeholder-settings call shapes, and enumeration of the
//!   renderings currently injected into the item's design (or snippet, for
//!   partial-design items).
//! - [`AllowedRenderings`] - the sibling pipeline step computing which
//!   rendering definitions a placeholder accepts. It may rewrite the
//!   placeholder key while resolving; the outcome carries the final key.
//! - [`ButtonSource`] - static configuration lookup mapping a fixed path to
//!   an edit-button list (see [`crate::config::ButtonLibrary`] for the
//!   shipped TOML-backed implementation).
//!
//! All calls are synchronous and blocking from the core's perspective.
//! Implementations report their own failures as [`anyhow::Error`]; absence
//! of a settings item is **not** a failure, it is an `Ok(None)` / empty
//! collection the resolver falls through.

use anyhow::Result;
use uuid::Uuid;

use crate::chrome::EditButton;
use crate::context::DeviceId;
use crate::placeholder::PlaceholderKey;

/// The content item a page renders. Optional at the chrome API surface:
/// placeholder chrome can be requested for a slot with no backing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier of the item.
    pub id: Uuid,
    /// Name of the database the item lives in.
    pub database: String,
    /// Whether the item is a partial design (drives snippet-scoped rendering
    /// enumeration inside [`LayoutService::injected_renderings`]).
    pub partial_design: bool,
}

impl Item {
    /// A regular (non-partial-design) item.
    pub fn new(id: Uuid, database: impl Into<String>) -> Self {
        Self {
            id,
            database: database.into(),
            partial_design: false,
        }
    }

    /// Mark the item as a partial design.
    pub fn with_partial_design(mut self, partial_design: bool) -> Self {
        self.partial_design = partial_design;
        self
    }
}

/// Opaque layout identity of an item, as reported by the layout service.
///
/// The core never inspects it; it only forwards it between collaborator
/// calls. May be empty when an item defines no layout of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout(String);

impl Layout {
    /// Wrap a layout identity.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the item defined no layout.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A placeholder-settings definition resolved from content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsItem {
    /// Identifier of the settings definition.
    pub id: Uuid,
    /// Raw (unescaped) display name; the builder HTML-escapes it before it
    /// enters a chrome record.
    pub display_name: String,
    /// Whether the definition marks the placeholder as editable.
    pub editable: bool,
}

impl SettingsItem {
    /// A settings definition that is editable unless stated otherwise.
    pub fn new(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            editable: true,
        }
    }

    /// Override the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// One rendering currently injected into a placeholder slot ("what's already
/// on the page" for a device/design context).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingReference {
    /// The slot the rendering occupies, exactly as recorded by the layout.
    pub placeholder: PlaceholderKey,
    /// Stable unique identifier of this rendering instance.
    pub unique_id: Uuid,
}

impl RenderingReference {
    /// Reference to a rendering instance occupying `placeholder`.
    pub fn new(placeholder: impl Into<PlaceholderKey>, unique_id: Uuid) -> Self {
        Self {
            placeholder: placeholder.into(),
            unique_id,
        }
    }
}

/// Input to the allowed-renderings sibling step.
#[derive(Debug, Clone)]
pub struct AllowedQuery {
    /// The placeholder being resolved.
    pub key: PlaceholderKey,
    /// Layout identity of the item (may be empty).
    pub layout: Layout,
    /// Database the item lives in.
    pub database: String,
    /// Omit rendering definitions that are not editable in the current mode.
    pub omit_non_editable: bool,
}

/// Output of the allowed-renderings sibling step.
#[derive(Debug, Clone)]
pub struct AllowedOutcome {
    /// Rendering-definition identifiers allowed on the placeholder, in the
    /// order the step reported them.
    pub rendering_ids: Vec<Uuid>,
    /// Whether the step found slot-specific placeholder settings at all.
    pub has_settings: bool,
    /// The placeholder key after resolution: the step may rewrite it (for
    /// example resolving a wildcard), and later lookups use the final form.
    pub resolved_key: PlaceholderKey,
}

impl AllowedOutcome {
    /// An outcome reporting no allowed renderings and no settings, with the
    /// key passed through untouched.
    pub fn empty_for(key: PlaceholderKey) -> Self {
        Self {
            rendering_ids: Vec::new(),
            has_settings: false,
            resolved_key: key,
        }
    }
}

/// Page-composition lookups backing the settings resolver and the builder.
pub trait LayoutService: Send + Sync {
    /// The layout identity of `item`.
    fn layout_of(&self, item: &Item) -> Result<Layout>;

    /// Device/site-aware settings definitions matching the full
    /// `(layout, key, item, device)` shape, in preference order.
    fn device_settings(
        &self,
        layout: &Layout,
        key: &PlaceholderKey,
        item: &Item,
        device: DeviceId,
    ) -> Result<Vec<SettingsItem>>;

    /// The single generic settings definition for `(key, item)`, if any.
    fn item_settings(&self, key: &PlaceholderKey, item: &Item) -> Result<Option<SettingsItem>>;

    /// Legacy settings lookup by `(key, database, layout)`, if any.
    fn legacy_settings(
        &self,
        key: &PlaceholderKey,
        database: &str,
        layout: &Layout,
    ) -> Result<Option<SettingsItem>>;

    /// Renderings currently injected for `item` on `device`. Implementations
    /// enumerate the snippet when `item.partial_design` is set and the
    /// associated design item otherwise.
    fn injected_renderings(&self, item: &Item, device: DeviceId) -> Result<Vec<RenderingReference>>;
}

/// The sibling pipeline step computing allowed rendering definitions.
pub trait AllowedRenderings: Send + Sync {
    /// Run the step for `query`.
    fn resolve(&self, query: &AllowedQuery) -> Result<AllowedOutcome>;
}

/// Static configuration lookup: a fixed path to an edit-button list.
pub trait ButtonSource: Send + Sync {
    /// The button set registered at `path`; empty when the path is unknown.
    fn buttons_at(&self, path: &str) -> Result<Vec<EditButton>>;
}
