//! Process-wide chrome record cache.
//!
//! Resolved chrome records are cached per placeholder-resolution input so
//! repeated requests for the same slot skip the collaborator round-trips.
//! The cache is deliberately simple:
//!
//! - [`CacheKey`] captures the resolution *inputs* (site, device, item
//!   identity, slot). Equal keys mean the same inputs, never that a cached
//!   *output* is still correct: the editing session may have rearranged the
//!   page since the entry was stored. Every hit therefore passes through the
//!   [`validity`] check before it is served.
//! - [`CacheEntry`] is immutable once stored and handed out behind an
//!   [`Arc`]. Callers clone the record out, so a request-local record never
//!   aliases a cached one.
//! - [`ChromeCache`] wraps a [`DashMap`] for per-key atomicity. Concurrent
//!   writers race last-write-wins; a redundant recomputation is acceptable.
//!
//! There is no eviction policy. Hosts call [`ChromeCache::remove`] or
//! [`ChromeCache::clear`] on the events that invalidate their content
//! (publish, site change, and so on).

pub mod validity;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::chrome::ChromeData;
use crate::context::DeviceId;
use crate::placeholder::PlaceholderKey;
use crate::utils::short_id;

/// Identity of one chrome resolution: which slot, for which item, on which
/// device and site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    site: String,
    device: DeviceId,
    /// Uppercase short id of the context item, or `None` for item-less
    /// requests.
    item: Option<String>,
    slot: String,
}

impl CacheKey {
    pub fn new(
        site: impl Into<String>,
        device: DeviceId,
        item: Option<&Uuid>,
        slot: &PlaceholderKey,
    ) -> Self {
        Self {
            site: site.into(),
            device,
            item: item.map(short_id),
            slot: slot.as_str().to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item.as_deref().unwrap_or("-");
        write!(
            f,
            "chrome:{}:{}:{}:{}",
            self.site, self.device, item, self.slot
        )
    }
}

/// A stored record plus its storage timestamp (diagnostic surface only; age
/// never influences validity).
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub record: ChromeData,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Wrap a freshly built record, stamped now.
    pub fn new(record: ChromeData) -> Self {
        Self {
            record,
            stored_at: Utc::now(),
        }
    }
}

/// Shared, concurrently accessed store of resolved chrome records.
#[derive(Debug, Default)]
pub struct ChromeCache {
    entries: DashMap<CacheKey, Arc<CacheEntry>>,
}

impl ChromeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry stored under `key`, if any. Callers still owe the validity
    /// check; the cache only answers "have I seen these inputs".
    pub fn get(&self, key: &CacheKey) -> Option<Arc<CacheEntry>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Store `entry` under `key`, replacing any previous entry.
    pub fn put(&self, key: CacheKey, entry: CacheEntry) {
        tracing::debug!("caching chrome record under {key}");
        self.entries.insert(key, Arc::new(entry));
    }

    /// Drop the entry under `key`, returning whether one existed.
    pub fn remove(&self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
