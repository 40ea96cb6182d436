//! Cache validity: may a cached chrome record still be served?
//!
//! A cached record can embed edit buttons that back-reference a specific
//! rendering instance (`referenceId=<short id>` in the click action). Those
//! buttons were correct for the page arrangement at store time. When the
//! client submits an in-progress layout document describing a *different*
//! arrangement, serving the stale buttons would wire edit actions to the
//! wrong component, so the hit must be rejected and the record rebuilt.
//!
//! The check is deliberately one-directional: records without back-reference
//! buttons are arrangement-independent and always valid, and a request that
//! submitted no document (or an unreadable one) leaves the stored
//! arrangement authoritative.

use crate::cache::CacheEntry;
use crate::chrome::EditButton;
use crate::context::RequestContext;
use crate::layout::{DeviceRenderings, LayoutDocument, RenderingInstance};
use crate::placeholder::PlaceholderKey;
use crate::utils::short_id;

/// Decide whether `entry` may be served for a request on `key` under `ctx`.
pub fn entry_is_valid(entry: &CacheEntry, key: &PlaceholderKey, ctx: &RequestContext) -> bool {
    let back_refs: Vec<&EditButton> = entry.record.back_reference_buttons().collect();
    if back_refs.is_empty() {
        return true;
    }

    let Some(document) = LayoutDocument::from_submission(ctx.in_progress_layout()) else {
        return true;
    };

    let candidate = document
        .device(ctx.device())
        .and_then(|device| nearest_rendering(device, key));
    let Some(rendering) = candidate else {
        // The submitted arrangement has nothing under this slot, so the
        // cached back-references cannot point anywhere current.
        tracing::debug!(
            "rejecting cached chrome for '{key}': no rendering under the slot in the submitted layout"
        );
        return false;
    };

    let reference = short_id(&rendering.unique_id);
    let valid = back_refs.iter().any(|button| button.references(&reference));
    if !valid {
        tracing::debug!(
            "rejecting cached chrome for '{key}': buttons do not reference rendering {reference}"
        );
    }
    valid
}

/// The rendering whose placeholder sits closest to `key`: among renderings
/// whose placeholder is part of the key, the one with the longest placeholder
/// path. Ties keep the first in document order.
fn nearest_rendering<'a>(
    device: &'a DeviceRenderings,
    key: &PlaceholderKey,
) -> Option<&'a RenderingInstance> {
    let mut best: Option<&RenderingInstance> = None;
    for rendering in &device.renderings {
        if !rendering.placeholder.is_part_of(key) {
            continue;
        }
        let longer = best
            .is_none_or(|current| rendering.placeholder.path_len() > current.placeholder.path_len());
        if longer {
            best = Some(rendering);
        }
    }
    best
}
