//! Placeholder settings resolution.
//!
//! Finding the settings definition for a placeholder is a fixed fallback
//! chain over three lookup shapes, run after the sibling allowed-renderings
//! step. The sibling step runs first because it may rewrite the placeholder
//! key (resolving a wildcard, for example); the legacy lookup and all later
//! display-name handling use the rewritten key.
//!
//! The chain is an explicit ordered list rather than nested conditionals so
//! the precedence is visible in one place:
//!
//! 1. Device-aware - full `(layout, key, item, device)` shape; the first of
//!    its ordered matches wins.
//! 2. Item-generic - the single `(key, item)` definition.
//! 3. Legacy - `(resolved key, database, layout)`.
//!
//! Every miss is an ordinary fall-through. Only a collaborator failure
//! aborts resolution.

use std::sync::Arc;

use crate::context::DeviceId;
use crate::core::ChromeResult;
use crate::placeholder::PlaceholderKey;
use crate::services::{AllowedQuery, AllowedRenderings, Item, LayoutService, SettingsItem};
use crate::utils::short_id;

/// One step of the settings fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    DeviceAware,
    ItemGeneric,
    Legacy,
}

/// Fixed precedence. Reordering this list changes observable resolution.
const CHAIN: [Strategy; 3] = [Strategy::DeviceAware, Strategy::ItemGeneric, Strategy::Legacy];

/// Everything the builder needs from one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    /// The winning settings definition, if any step matched.
    pub settings_item: Option<SettingsItem>,
    /// Whether the sibling step found slot-specific settings at all.
    pub has_settings: bool,
    /// Uppercase short ids of the allowed rendering definitions, in sibling
    /// step order.
    pub allowed_ids: Vec<String>,
    /// The placeholder key after sibling resolution (may differ from the
    /// requested key).
    pub resolved_key: PlaceholderKey,
    /// Wildcard slots with no device-aware match never take a
    /// settings-derived display name, even when a later step matched.
    pub suppress_display_name: bool,
}

/// Runs the sibling step and the fallback chain for one placeholder.
pub struct SettingsResolver {
    layout_service: Arc<dyn LayoutService>,
    allowed_renderings: Arc<dyn AllowedRenderings>,
}

impl SettingsResolver {
    pub fn new(
        layout_service: Arc<dyn LayoutService>,
        allowed_renderings: Arc<dyn AllowedRenderings>,
    ) -> Self {
        Self {
            layout_service,
            allowed_renderings,
        }
    }

    /// Resolve settings for `key` on `item` as rendered on `device`.
    pub fn resolve(
        &self,
        key: &PlaceholderKey,
        item: &Item,
        device: DeviceId,
    ) -> ChromeResult<ResolvedSettings> {
        let layout = self.layout_service.layout_of(item)?;

        let query = AllowedQuery {
            key: key.clone(),
            layout: layout.clone(),
            database: item.database.clone(),
            omit_non_editable: true,
        };
        let outcome = self.allowed_renderings.resolve(&query)?;
        let resolved_key = outcome.resolved_key;
        let allowed_ids: Vec<String> = outcome.rendering_ids.iter().map(short_id).collect();
        if resolved_key != *key {
            tracing::debug!("sibling step rewrote placeholder key '{key}' to '{resolved_key}'");
        }

        let mut settings_item = None;
        let mut device_aware_matched = false;
        for strategy in CHAIN {
            let candidate = match strategy {
                Strategy::DeviceAware => {
                    let mut matches =
                        self.layout_service
                            .device_settings(&layout, key, item, device)?;
                    device_aware_matched = !matches.is_empty();
                    if matches.is_empty() {
                        None
                    } else {
                        Some(matches.remove(0))
                    }
                }
                Strategy::ItemGeneric => self.layout_service.item_settings(key, item)?,
                Strategy::Legacy => {
                    self.layout_service
                        .legacy_settings(&resolved_key, &item.database, &layout)?
                }
            };
            if let Some(found) = candidate {
                tracing::debug!(
                    "placeholder settings for '{key}' resolved via {strategy:?}: {}",
                    found.display_name
                );
                settings_item = Some(found);
                break;
            }
        }
        if settings_item.is_none() {
            tracing::debug!("no placeholder settings found for '{key}'");
        }

        let suppress_display_name = resolved_key.is_wildcard() && !device_aware_matched;

        Ok(ResolvedSettings {
            settings_item,
            has_settings: outcome.has_settings,
            allowed_ids,
            resolved_key,
            suppress_display_name,
        })
    }
}
