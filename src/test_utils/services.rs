//! In-memory collaborator fakes.
//!
//! Each fake returns fixed data configured up front, so tests can pin one
//! resolution branch at a time. Failure injection covers the error paths:
//! a fake configured with `failing(..)` returns `Err` from every call.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use uuid::Uuid;

use crate::chrome::EditButton;
use crate::context::DeviceId;
use crate::placeholder::PlaceholderKey;
use crate::services::{
    AllowedOutcome, AllowedQuery, AllowedRenderings, ButtonSource, Item, Layout, LayoutService,
    RenderingReference, SettingsItem,
};

/// A [`LayoutService`] serving canned answers.
#[derive(Debug, Default)]
pub struct StaticLayoutService {
    pub layout: Layout,
    pub device_aware: Vec<SettingsItem>,
    pub item_generic: Option<SettingsItem>,
    pub legacy: Option<SettingsItem>,
    pub injected: Vec<RenderingReference>,
    fail_with: Option<String>,
    enumerations: AtomicUsize,
    legacy_keys: Mutex<Vec<String>>,
}

impl StaticLayoutService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_device_aware(mut self, settings: Vec<SettingsItem>) -> Self {
        self.device_aware = settings;
        self
    }

    pub fn with_item_generic(mut self, settings: SettingsItem) -> Self {
        self.item_generic = Some(settings);
        self
    }

    pub fn with_legacy(mut self, settings: SettingsItem) -> Self {
        self.legacy = Some(settings);
        self
    }

    pub fn with_injected(mut self, injected: Vec<RenderingReference>) -> Self {
        self.injected = injected;
        self
    }

    /// How many times `injected_renderings` has run. Lets tests observe the
    /// re-enumeration a cache hit performs when the request-local marker is
    /// absent.
    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }

    /// Every key `legacy_settings` was asked for, in call order.
    pub fn legacy_keys(&self) -> Vec<String> {
        self.legacy_keys.lock().expect("legacy key log").clone()
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

impl LayoutService for StaticLayoutService {
    fn layout_of(&self, _item: &Item) -> Result<Layout> {
        self.check()?;
        Ok(self.layout.clone())
    }

    fn device_settings(
        &self,
        _layout: &Layout,
        _key: &PlaceholderKey,
        _item: &Item,
        _device: DeviceId,
    ) -> Result<Vec<SettingsItem>> {
        self.check()?;
        Ok(self.device_aware.clone())
    }

    fn item_settings(&self, _key: &PlaceholderKey, _item: &Item) -> Result<Option<SettingsItem>> {
        self.check()?;
        Ok(self.item_generic.clone())
    }

    fn legacy_settings(
        &self,
        key: &PlaceholderKey,
        _database: &str,
        _layout: &Layout,
    ) -> Result<Option<SettingsItem>> {
        self.check()?;
        self.legacy_keys
            .lock()
            .expect("legacy key log")
            .push(key.as_str().to_string());
        Ok(self.legacy.clone())
    }

    fn injected_renderings(
        &self,
        _item: &Item,
        _device: DeviceId,
    ) -> Result<Vec<RenderingReference>> {
        self.check()?;
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        Ok(self.injected.clone())
    }
}

/// An [`AllowedRenderings`] step serving a canned outcome, optionally
/// rewriting the placeholder key the way the real step can.
#[derive(Debug, Default)]
pub struct StaticAllowedRenderings {
    pub rendering_ids: Vec<Uuid>,
    pub has_settings: bool,
    pub rewrite_to: Option<PlaceholderKey>,
    fail_with: Option<String>,
}

impl StaticAllowedRenderings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_rendering_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.rendering_ids = ids;
        self
    }

    pub fn with_has_settings(mut self, has_settings: bool) -> Self {
        self.has_settings = has_settings;
        self
    }

    /// Make the step rewrite every queried key to `key`.
    pub fn rewriting_to(mut self, key: impl Into<PlaceholderKey>) -> Self {
        self.rewrite_to = Some(key.into());
        self
    }
}

impl AllowedRenderings for StaticAllowedRenderings {
    fn resolve(&self, query: &AllowedQuery) -> Result<AllowedOutcome> {
        if let Some(message) = &self.fail_with {
            return Err(anyhow!("{message}"));
        }
        Ok(AllowedOutcome {
            rendering_ids: self.rendering_ids.clone(),
            has_settings: self.has_settings,
            resolved_key: self
                .rewrite_to
                .clone()
                .unwrap_or_else(|| query.key.clone()),
        })
    }
}

/// A [`ButtonSource`] backed by a path map. Unknown paths yield no buttons.
#[derive(Debug, Default)]
pub struct StaticButtons {
    sets: HashMap<String, Vec<EditButton>>,
}

impl StaticButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, path: impl Into<String>, buttons: Vec<EditButton>) -> Self {
        self.sets.insert(path.into(), buttons);
        self
    }
}

impl ButtonSource for StaticButtons {
    fn buttons_at(&self, path: &str) -> Result<Vec<EditButton>> {
        Ok(self.sets.get(path).cloned().unwrap_or_default())
    }
}
