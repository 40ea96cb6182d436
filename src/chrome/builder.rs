//! Assembly of chrome records from resolved settings.

use std::sync::Arc;

use crate::chrome::ChromeData;
use crate::context::DeviceId;
use crate::core::ChromeResult;
use crate::placeholder::PlaceholderKey;
use crate::services::{ButtonSource, Item, RenderingReference};
use crate::settings::SettingsResolver;
use crate::utils::html_escape;

/// Assembles [`ChromeData`] records for placeholder slots.
///
/// The entry point is [`ChromeDataBuilder::populate`], which layers onto an
/// existing record: repeated passes append buttons and custom properties but
/// never clobber an `allowedRenderings` value an earlier pass set. The
/// `editable` flag is derived state and is overwritten each pass.
/// [`ChromeDataBuilder::build`] is the common single-pass form.
pub struct ChromeDataBuilder {
    settings: SettingsResolver,
    button_source: Arc<dyn ButtonSource>,
    default_buttons_path: String,
}

impl ChromeDataBuilder {
    pub fn new(
        settings: SettingsResolver,
        button_source: Arc<dyn ButtonSource>,
        default_buttons_path: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            button_source,
            default_buttons_path: default_buttons_path.into(),
        }
    }

    /// Build a fresh record for `key`.
    pub fn build(
        &self,
        key: &PlaceholderKey,
        item: Option<&Item>,
        device: DeviceId,
        injected: &[RenderingReference],
    ) -> ChromeResult<ChromeData> {
        let mut record = ChromeData::new();
        self.populate(&mut record, key, item, device, injected)?;
        Ok(record)
    }

    /// Layer chrome for `key` onto `record`.
    ///
    /// `injected` is the rendering enumeration for the current item and
    /// device (empty for item-less requests); it decides whether the slot
    /// already holds content and therefore skips the default button set.
    pub fn populate(
        &self,
        record: &mut ChromeData,
        key: &PlaceholderKey,
        item: Option<&Item>,
        device: DeviceId,
        injected: &[RenderingReference],
    ) -> ChromeResult<()> {
        record.display_name = key.last_segment().to_string();

        if is_preinjected(key, injected) {
            tracing::debug!("slot '{key}' already holds a rendering; skipping default buttons");
        } else {
            let defaults = self.button_source.buttons_at(&self.default_buttons_path)?;
            record.add_buttons(defaults);
        }

        let Some(item) = item else {
            record.set_allowed_renderings_if_absent(&[]);
            record.set_editable(true);
            return Ok(());
        };

        let resolved = self.settings.resolve(key, item, device)?;
        record.set_allowed_renderings_if_absent(&resolved.allowed_ids);

        if !resolved.suppress_display_name {
            record.display_name = match &resolved.settings_item {
                Some(settings) => html_escape(&settings.display_name),
                None => resolved.resolved_key.last_segment().to_string(),
            };
        }

        // A resolved definition speaks for itself. Otherwise the slot is
        // freely editable exactly when no settings exist anywhere for it.
        let editable = resolved
            .settings_item
            .as_ref()
            .map_or(!resolved.has_settings, |settings| settings.editable);
        record.set_editable(editable);

        Ok(())
    }
}

/// Whether `key` is already represented among the injected renderings. Both
/// the bare and the `/`-prefixed spelling of the key count.
fn is_preinjected(key: &PlaceholderKey, injected: &[RenderingReference]) -> bool {
    let prefixed = format!("/{}", key.as_str());
    injected.iter().any(|reference| {
        let slot = reference.placeholder.as_str();
        slot == key.as_str() || slot == prefixed
    })
}
