//! Common test utilities and fixtures for page-chrome integration tests
//!
//! This module consolidates frequently used test patterns to reduce duplication
//! and improve test maintainability.

// Allow dead code because these utilities are used across different test files
// and not all utilities are used in every test file
#![allow(dead_code)]

use std::sync::Arc;

use uuid::Uuid;

use page_chrome::{
    ChromeCache, ChromeRequest, ChromeResolver, DeviceId, FormData, RequestContext,
    config::ChromeConfig,
    services::{Item, LayoutService},
    test_utils::{
        StaticAllowedRenderings, StaticButtons, StaticLayoutService, default_buttons,
        form_with_layout, init_test_logging,
    },
};

/// A wired-up resolver with handles to everything a test may want to inspect.
pub struct Harness {
    pub layout_service: Arc<StaticLayoutService>,
    pub cache: Arc<ChromeCache>,
    pub resolver: ChromeResolver,
    pub device: DeviceId,
}

impl Harness {
    /// Default harness: no settings anywhere, built-in default button set,
    /// caching enabled.
    pub fn new() -> Self {
        Self::with(
            StaticLayoutService::new(),
            StaticAllowedRenderings::new(),
            ChromeConfig::default(),
        )
    }

    /// A harness over explicit collaborator fakes.
    pub fn with(
        layout_service: StaticLayoutService,
        allowed: StaticAllowedRenderings,
        config: ChromeConfig,
    ) -> Self {
        init_test_logging(None);
        let layout_service = Arc::new(layout_service);
        let cache = Arc::new(ChromeCache::new());
        let buttons = StaticButtons::new()
            .with_set(config.default_buttons_path.clone(), default_buttons());
        let resolver = ChromeResolver::new(
            Arc::clone(&layout_service) as Arc<dyn LayoutService>,
            Arc::new(allowed),
            Arc::new(buttons),
            Arc::clone(&cache),
            config,
        );
        Self {
            layout_service,
            cache,
            resolver,
            device: DeviceId::new(Uuid::new_v4()),
        }
    }

    /// A context for this harness's device with no form submission.
    pub fn ctx(&self) -> RequestContext {
        RequestContext::new("website", self.device)
    }

    /// A context whose form carries `raw` as the in-progress layout document.
    pub fn ctx_with_layout(&self, raw: impl Into<String>) -> RequestContext {
        self.ctx().with_form(form_with_layout(raw))
    }

    /// A context with an arbitrary form submission.
    pub fn ctx_with_form(&self, form: FormData) -> RequestContext {
        self.ctx().with_form(form)
    }
}

/// A throwaway item in the `master` database.
pub fn item() -> Item {
    Item::new(Uuid::new_v4(), "master")
}

/// A request for `slot` carrying a throwaway item.
pub fn request_with_item(slot: &str) -> ChromeRequest {
    ChromeRequest::new(slot).with_item(item())
}
