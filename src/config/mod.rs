//! Configuration: resolver behavior and the edit-button library.
//!
//! Two TOML surfaces, both optional (everything has a built-in default):
//!
//! - [`ChromeConfig`] - resolver behavior switches (cache toggle, which
//!   button-library path supplies the default placeholder buttons).
//! - [`ButtonLibrary`] - path-keyed sets of [`EditButton`]s, the shipped
//!   [`ButtonSource`] implementation. Loading a library file *underlays* the
//!   built-in sets: file entries win, built-ins fill the gaps.
//!
//! ```toml
//! # chrome.toml
//! cache_enabled = true
//! default_buttons_path = "editing/default-placeholder-buttons"
//! ```
//!
//! ```toml
//! # buttons.toml
//! [sets]
//! "editing/default-placeholder-buttons" = [
//!     { header = "Add to here", click = "chrome:placeholder:addControl" },
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chrome::EditButton;
use crate::constants::DEFAULT_PLACEHOLDER_BUTTONS_PATH;
use crate::core::{ChromeError, ChromeResult};
use crate::services::ButtonSource;

/// Behavior switches for the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Whether resolved records are cached and served from the cache.
    pub cache_enabled: bool,
    /// Button-library path of the default placeholder button set.
    pub default_buttons_path: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            default_buttons_path: DEFAULT_PLACEHOLDER_BUTTONS_PATH.to_string(),
        }
    }
}

impl ChromeConfig {
    /// Parse the TOML form. Missing fields take their defaults.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ConfigIo`] when the file cannot be read and
    /// [`ChromeError::ConfigInvalid`] when it does not parse.
    pub fn load(path: &Path) -> ChromeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ChromeError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw).map_err(|error| ChromeError::ConfigInvalid {
            path: path.display().to_string(),
            reason: error.to_string(),
        })
    }
}

/// Path-keyed edit-button sets.
///
/// Paths are opaque lookup keys (`editing/default-placeholder-buttons`), not
/// filesystem locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLibrary {
    #[serde(default)]
    sets: HashMap<String, Vec<EditButton>>,
}

impl Default for ButtonLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ButtonLibrary {
    /// The built-in sets shipped with the crate: the default placeholder
    /// button set only.
    pub fn builtin() -> Self {
        let mut sets = HashMap::new();
        sets.insert(
            DEFAULT_PLACEHOLDER_BUTTONS_PATH.to_string(),
            vec![EditButton::new(
                "Add to here",
                "office/16x16/add.png",
                "chrome:placeholder:addControl",
                "Add a new rendering to this placeholder",
            )],
        );
        Self { sets }
    }

    /// A library with no sets at all.
    pub fn empty() -> Self {
        Self { sets: HashMap::new() }
    }

    /// Parse the TOML form, exactly as written (no built-in underlay).
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Load a library file and underlay the built-in sets: sets defined in
    /// the file win, built-ins fill in anything the file leaves out.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ConfigIo`] when the file cannot be read and
    /// [`ChromeError::ConfigInvalid`] when it does not parse.
    pub fn load(path: &Path) -> ChromeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ChromeError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let mut library = Self::parse(&raw).map_err(|error| ChromeError::ConfigInvalid {
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;
        for (path, buttons) in Self::builtin().sets {
            library.sets.entry(path).or_insert(buttons);
        }
        Ok(library)
    }

    /// Register (or replace) a set.
    pub fn with_set(mut self, path: impl Into<String>, buttons: Vec<EditButton>) -> Self {
        self.sets.insert(path.into(), buttons);
        self
    }

    /// The set registered at `path`, if any.
    pub fn set(&self, path: &str) -> Option<&[EditButton]> {
        self.sets.get(path).map(Vec::as_slice)
    }
}

impl ButtonSource for ButtonLibrary {
    fn buttons_at(&self, path: &str) -> anyhow::Result<Vec<EditButton>> {
        Ok(self.sets.get(path).cloned().unwrap_or_default())
    }
}
