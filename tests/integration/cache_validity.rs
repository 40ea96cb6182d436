//! Cache behavior end to end: hits, validity rejection, re-enumeration.

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use page_chrome::config::ChromeConfig;
use page_chrome::services::LayoutService;
use page_chrome::test_utils::{
    StaticAllowedRenderings, StaticButtons, StaticLayoutService, back_reference_button,
    layout_json,
};
use page_chrome::{CacheEntry, CacheKey, ChromeData, ChromeRequest, ChromeResolver, RequestContext};

use crate::common::{Harness, item, request_with_item};

/// Resolving the same inputs twice serves the cached record.
#[test]
fn test_second_resolution_is_a_cache_hit() -> Result<()> {
    let h = Harness::new();
    let request = request_with_item("main");
    let ctx = h.ctx().with_rendering_sources_resolved(true);

    let first = h.resolver.resolve_chrome(&request, &ctx)?;
    let enumerations = h.layout_service.enumeration_count();
    let second = h.resolver.resolve_chrome(&request, &ctx)?;

    assert_eq!(first, second);
    assert_eq!(h.layout_service.enumeration_count(), enumerations);
    assert_eq!(h.cache.len(), 1);
    Ok(())
}

/// A validated hit with the request-local sources marker unset re-runs the
/// injected-rendering enumeration once, for its side effects.
#[test]
fn test_hit_without_marker_re_enumerates() -> Result<()> {
    let h = Harness::new();
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    assert_eq!(h.layout_service.enumeration_count(), after_miss + 1);

    let marked = h.ctx().with_rendering_sources_resolved(true);
    h.resolver.resolve_chrome(&request, &marked)?;
    assert_eq!(h.layout_service.enumeration_count(), after_miss + 1);
    Ok(())
}

/// Back-reference buttons matching the submitted arrangement keep the hit.
#[test]
fn test_matching_back_reference_serves_the_hit() -> Result<()> {
    let unique = Uuid::new_v4();
    let h = harness_with_back_reference_defaults(&unique);
    let request = request_with_item("main");

    let built = h.resolver.resolve_chrome(&request, &h.ctx())?;
    assert!(built.has_back_reference_buttons());

    // Submit a document that still contains the referenced rendering.
    let submitted = layout_json(h.device, &[(unique, "/main")]);
    let ctx = h
        .ctx_with_layout(submitted)
        .with_rendering_sources_resolved(true);
    let enumerations = h.layout_service.enumeration_count();

    let served = h.resolver.resolve_chrome(&request, &ctx)?;
    assert_eq!(built, served);
    assert_eq!(h.layout_service.enumeration_count(), enumerations);
    Ok(())
}

/// A submitted arrangement no longer containing the referenced rendering
/// rejects the cached record and rebuilds it.
#[test]
fn test_stale_back_reference_rebuilds() -> Result<()> {
    let unique = Uuid::new_v4();
    let h = harness_with_back_reference_defaults(&unique);
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    // The slot now holds a different rendering instance.
    let submitted = layout_json(h.device, &[(Uuid::new_v4(), "/main")]);
    let ctx = h
        .ctx_with_layout(submitted)
        .with_rendering_sources_resolved(true);

    h.resolver.resolve_chrome(&request, &ctx)?;
    // A rebuild enumerates; a served hit with the marker set would not.
    assert_eq!(h.layout_service.enumeration_count(), after_miss + 1);
    Ok(())
}

/// Among nested slots, the deepest rendering on the requested path is the
/// one the back-references must match.
#[test]
fn test_validity_selects_deepest_rendering() -> Result<()> {
    let outer = Uuid::new_v4();
    let inner = Uuid::new_v4();

    // Cached record references the outer rendering only.
    let h = harness_with_back_reference_defaults(&outer);
    let request = request_with_item("main/col1");
    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    let submitted = layout_json(h.device, &[(outer, "/main"), (inner, "/main/col1")]);
    let ctx = h
        .ctx_with_layout(submitted)
        .with_rendering_sources_resolved(true);

    h.resolver.resolve_chrome(&request, &ctx)?;
    // The deeper rendering is the candidate; the outer reference is stale.
    assert_eq!(h.layout_service.enumeration_count(), after_miss + 1);
    Ok(())
}

/// No submitted document leaves the stored arrangement authoritative.
#[test]
fn test_no_submission_is_valid_by_default() -> Result<()> {
    let unique = Uuid::new_v4();
    let h = harness_with_back_reference_defaults(&unique);
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    let ctx = h.ctx().with_rendering_sources_resolved(true);
    h.resolver.resolve_chrome(&request, &ctx)?;
    assert_eq!(h.layout_service.enumeration_count(), after_miss);
    Ok(())
}

/// An unreadable document is treated as "not submitted", never an error.
#[test]
fn test_malformed_submission_serves_the_hit() -> Result<()> {
    let unique = Uuid::new_v4();
    let h = harness_with_back_reference_defaults(&unique);
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    let ctx = h
        .ctx_with_layout("{broken json!")
        .with_rendering_sources_resolved(true);
    h.resolver.resolve_chrome(&request, &ctx)?;
    assert_eq!(h.layout_service.enumeration_count(), after_miss);
    Ok(())
}

/// A submitted document with nothing under the slot fails closed.
#[test]
fn test_empty_arrangement_fails_closed() -> Result<()> {
    let unique = Uuid::new_v4();
    let h = harness_with_back_reference_defaults(&unique);
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    let after_miss = h.layout_service.enumeration_count();

    let submitted = layout_json(h.device, &[]);
    let ctx = h
        .ctx_with_layout(submitted)
        .with_rendering_sources_resolved(true);

    h.resolver.resolve_chrome(&request, &ctx)?;
    assert_eq!(h.layout_service.enumeration_count(), after_miss + 1);
    Ok(())
}

/// Pre-seeded empty records are ignored and replaced.
#[test]
fn test_empty_cached_record_is_a_miss() -> Result<()> {
    let h = Harness::new();
    let request = ChromeRequest::new("main");
    let key = CacheKey::new("website", h.device, None, &"main".into());
    h.cache.put(key.clone(), CacheEntry::new(ChromeData::new()));

    let record = h.resolver.resolve_chrome(&request, &h.ctx())?;

    assert!(!record.is_empty());
    assert!(!h.cache.get(&key).unwrap().record.is_empty());
    Ok(())
}

/// Disabling the cache bypasses both lookup and store.
#[test]
fn test_cache_disabled_never_stores() -> Result<()> {
    let config = ChromeConfig {
        cache_enabled: false,
        ..ChromeConfig::default()
    };
    let h = Harness::with(
        StaticLayoutService::new(),
        StaticAllowedRenderings::new(),
        config,
    );
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    h.resolver.resolve_chrome(&request, &h.ctx())?;

    assert!(h.cache.is_empty());
    // Every resolution enumerated afresh.
    assert_eq!(h.layout_service.enumeration_count(), 2);
    Ok(())
}

/// Entries are scoped by device and site; different inputs never collide.
#[test]
fn test_entries_are_scoped_by_inputs() -> Result<()> {
    let h = Harness::new();
    let request = request_with_item("main");

    h.resolver.resolve_chrome(&request, &h.ctx())?;
    h.resolver.resolve_chrome(
        &request,
        &RequestContext::new("website", page_chrome::DeviceId::new(Uuid::new_v4())),
    )?;
    h.resolver
        .resolve_chrome(&request, &RequestContext::new("intranet", h.device))?;

    assert_eq!(h.cache.len(), 3);
    Ok(())
}

/// Concurrent resolutions of the same inputs settle on one entry and every
/// caller sees a complete record.
#[test]
fn test_concurrent_resolution_is_consistent() -> Result<()> {
    let h = Harness::new();
    let device = h.device;
    let cache = Arc::clone(&h.cache);
    let resolver = Arc::new(h.resolver);
    let the_item = item();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let resolver = Arc::clone(&resolver);
        let ctx = RequestContext::new("website", device);
        let request = ChromeRequest::new("main").with_item(the_item.clone());
        handles.push(std::thread::spawn(move || -> Result<()> {
            for _ in 0..25 {
                let record = resolver.resolve_chrome(&request, &ctx)?;
                assert_eq!(record.display_name, "main");
            }
            Ok(())
        }));
    }
    for handle in handles {
        handle.join().expect("worker panicked")?;
    }

    assert_eq!(cache.len(), 1);
    Ok(())
}

/// Harness whose default button set back-references `unique`, so freshly
/// built records are arrangement-dependent.
fn harness_with_back_reference_defaults(unique: &Uuid) -> Harness {
    let config = ChromeConfig::default();
    let layout_service = Arc::new(StaticLayoutService::new());
    let cache = Arc::new(page_chrome::ChromeCache::new());
    let buttons = StaticButtons::new().with_set(
        config.default_buttons_path.clone(),
        vec![back_reference_button(unique)],
    );
    let resolver = ChromeResolver::new(
        Arc::clone(&layout_service) as Arc<dyn LayoutService>,
        Arc::new(StaticAllowedRenderings::new()),
        Arc::new(buttons),
        Arc::clone(&cache),
        config,
    );
    Harness {
        layout_service,
        cache,
        resolver,
        device: page_chrome::DeviceId::new(Uuid::new_v4()),
    }
}
