//! Top-level chrome resolution pipeline.

use std::sync::Arc;

use crate::cache::{CacheEntry, CacheKey, ChromeCache, validity};
use crate::chrome::{ChromeData, ChromeDataBuilder};
use crate::config::ChromeConfig;
use crate::context::RequestContext;
use crate::core::{ChromeError, ChromeResult};
use crate::placeholder::PlaceholderKey;
use crate::services::{AllowedRenderings, ButtonSource, Item, LayoutService, RenderingReference};
use crate::settings::SettingsResolver;

/// One chrome request: which slot, optionally on which item.
#[derive(Debug, Clone)]
pub struct ChromeRequest {
    /// Placeholder key as the client sent it. Must be non-blank.
    pub placeholder_key: String,
    /// The content item the page renders, when there is one.
    pub item: Option<Item>,
}

impl ChromeRequest {
    pub fn new(placeholder_key: impl Into<String>) -> Self {
        Self {
            placeholder_key: placeholder_key.into(),
            item: None,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }
}

/// Resolves chrome records, caching them across requests.
///
/// The pipeline for one request:
///
/// 1. Reject blank placeholder keys before anything else runs.
/// 2. With caching enabled, look the inputs up. A hit is served only when
///    the stored record is non-empty and passes the
///    [`validity`](crate::cache::validity) check against the submitted
///    in-progress layout; empty or stale entries fall through to a rebuild.
/// 3. On a validated hit, re-run the injected-rendering enumeration once
///    when the request-local "sources resolved" marker is unset. Later
///    pipeline stages depend on that enumeration having happened, and a
///    cache hit would otherwise skip it. The result itself is discarded.
/// 4. Otherwise enumerate injected renderings, build a fresh record, and
///    store it.
pub struct ChromeResolver {
    layout_service: Arc<dyn LayoutService>,
    builder: ChromeDataBuilder,
    cache: Arc<ChromeCache>,
    config: ChromeConfig,
}

impl ChromeResolver {
    pub fn new(
        layout_service: Arc<dyn LayoutService>,
        allowed_renderings: Arc<dyn AllowedRenderings>,
        button_source: Arc<dyn ButtonSource>,
        cache: Arc<ChromeCache>,
        config: ChromeConfig,
    ) -> Self {
        let settings = SettingsResolver::new(Arc::clone(&layout_service), allowed_renderings);
        let builder =
            ChromeDataBuilder::new(settings, button_source, config.default_buttons_path.clone());
        Self {
            layout_service,
            builder,
            cache,
            config,
        }
    }

    /// Resolve the chrome record for `request` under `ctx`.
    ///
    /// # Errors
    ///
    /// [`ChromeError::MissingPlaceholderKey`] when the request's key is
    /// blank, and [`ChromeError::Service`] when a collaborator call fails.
    /// Cache rejections are not errors; they trigger a rebuild.
    pub fn resolve_chrome(
        &self,
        request: &ChromeRequest,
        ctx: &RequestContext,
    ) -> ChromeResult<ChromeData> {
        if request.placeholder_key.trim().is_empty() {
            return Err(ChromeError::MissingPlaceholderKey);
        }
        let key = PlaceholderKey::from(request.placeholder_key.as_str());
        let cache_key = CacheKey::new(
            ctx.site(),
            ctx.device(),
            request.item.as_ref().map(|item| &item.id),
            &key,
        );

        if self.config.cache_enabled
            && let Some(entry) = self.cache.get(&cache_key)
        {
            if entry.record.is_empty() {
                tracing::debug!("ignoring empty cached chrome record under {cache_key}");
            } else if validity::entry_is_valid(&entry, &key, ctx) {
                if !ctx.rendering_sources_resolved()
                    && let Some(item) = &request.item
                {
                    // Prime the enumeration side effects; the result is not
                    // needed here.
                    self.layout_service.injected_renderings(item, ctx.device())?;
                }
                tracing::debug!("serving cached chrome record under {cache_key}");
                return Ok(entry.record.clone());
            }
        }

        let injected = self.enumerate_injected(request.item.as_ref(), ctx)?;
        let record = self
            .builder
            .build(&key, request.item.as_ref(), ctx.device(), &injected)?;

        if self.config.cache_enabled {
            self.cache.put(cache_key, CacheEntry::new(record.clone()));
        }
        Ok(record)
    }

    fn enumerate_injected(
        &self,
        item: Option<&Item>,
        ctx: &RequestContext,
    ) -> ChromeResult<Vec<RenderingReference>> {
        match item {
            Some(item) => Ok(self.layout_service.injected_renderings(item, ctx.device())?),
            None => Ok(Vec::new()),
        }
    }
}
