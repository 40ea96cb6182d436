//! TOML configuration and button-library loading end to end.

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use page_chrome::config::{ButtonLibrary, ChromeConfig};
use page_chrome::services::LayoutService;
use page_chrome::test_utils::{StaticAllowedRenderings, StaticLayoutService};
use page_chrome::{ChromeCache, ChromeError, ChromeResolver, DeviceId, RequestContext};

use crate::common::request_with_item;

#[test]
fn test_chrome_config_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chrome.toml");
    std::fs::write(
        &path,
        "cache_enabled = false\ndefault_buttons_path = \"editing/minimal\"\n",
    )?;

    let config = ChromeConfig::load(&path)?;
    assert!(!config.cache_enabled);
    assert_eq!(config.default_buttons_path, "editing/minimal");
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = ChromeConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(error, ChromeError::ConfigIo { .. }));
}

#[test]
fn test_invalid_config_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chrome.toml");
    std::fs::write(&path, "cache_enabled = \"yes please\"\n").unwrap();

    let error = ChromeConfig::load(&path).unwrap_err();
    assert!(matches!(error, ChromeError::ConfigInvalid { .. }));
    assert!(error.to_string().contains("chrome.toml"));
}

/// A loaded button library drives the resolver's default button set.
#[test]
fn test_button_library_feeds_the_resolver() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("buttons.toml");
    std::fs::write(
        &path,
        r#"
[sets]
"editing/minimal" = [
    { header = "Insert here", icon = "office/16x16/add.png", click = "chrome:placeholder:addControl", tooltip = "Insert a rendering" },
]
"#,
    )?;
    let library = ButtonLibrary::load(&path)?;

    let config = ChromeConfig {
        cache_enabled: true,
        default_buttons_path: "editing/minimal".to_string(),
    };
    let resolver = ChromeResolver::new(
        Arc::new(StaticLayoutService::new()) as Arc<dyn LayoutService>,
        Arc::new(StaticAllowedRenderings::new()),
        Arc::new(library),
        Arc::new(ChromeCache::new()),
        config,
    );

    let ctx = RequestContext::new("website", DeviceId::new(Uuid::new_v4()));
    let record = resolver.resolve_chrome(&request_with_item("main"), &ctx)?;

    assert_eq!(record.buttons.len(), 1);
    assert_eq!(record.buttons[0].header, "Insert here");
    Ok(())
}

/// The built-in default set answers when no library file is loaded.
#[test]
fn test_builtin_library_serves_defaults() -> Result<()> {
    let config = ChromeConfig::default();
    let resolver = ChromeResolver::new(
        Arc::new(StaticLayoutService::new()) as Arc<dyn LayoutService>,
        Arc::new(StaticAllowedRenderings::new()),
        Arc::new(ButtonLibrary::default()),
        Arc::new(ChromeCache::new()),
        config,
    );

    let ctx = RequestContext::new("website", DeviceId::new(Uuid::new_v4()));
    let record = resolver.resolve_chrome(&request_with_item("main"), &ctx)?;

    assert_eq!(record.buttons.len(), 1);
    assert_eq!(record.buttons[0].header, "Add to here");
    Ok(())
}

/// Loading a library underlays the built-ins rather than replacing them.
#[test]
fn test_loaded_library_keeps_builtin_sets() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("buttons.toml");
    std::fs::write(
        &path,
        "[sets]\n\"editing/extra\" = [ { header = \"Extra\", click = \"custom:extra\" } ]\n",
    )?;

    let library = ButtonLibrary::load(&path)?;
    assert!(library.set("editing/extra").is_some());
    assert!(
        library
            .set(ChromeConfig::default().default_buttons_path.as_str())
            .is_some()
    );
    Ok(())
}
