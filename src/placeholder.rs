//! Hierarchical placeholder key model.
//!
//! A placeholder key is an opaque path identifying a slot on a composed page,
//! with segments separated by `/` (for example `main/col1`). Keys may arrive
//! with or without a leading separator depending on which layer produced them,
//! and a key may end in the wildcard marker `*` when it stands for a family of
//! concrete slots (`main-*`).
//!
//! The only relation the model defines is *containment* ([`PlaceholderKey::is_part_of`]):
//! one key is part of another when its separator-trimmed path is a string
//! prefix of the other's. Containment is what the cache validity check uses to
//! find the rendering nearest to a requested slot; it is never used as an
//! equality test, and no normalization beyond trimming leading/trailing
//! separators is performed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::WILDCARD_SUFFIX;

/// An immutable hierarchical placeholder path.
///
/// Construction is infallible: any string is a syntactically acceptable key.
/// Whether the key *resolves* to anything is a question for the settings
/// resolver, not the key model.
///
/// # Examples
///
/// ```
/// use page_chrome::PlaceholderKey;
///
/// let outer = PlaceholderKey::from("/main");
/// let inner = PlaceholderKey::from("main/col1");
///
/// assert!(outer.is_part_of(&inner));
/// assert!(!inner.is_part_of(&outer));
/// assert_eq!(inner.last_segment(), "col1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderKey(String);

impl PlaceholderKey {
    /// The key exactly as constructed, separators and all.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path with leading and trailing separators removed. This is the
    /// form all containment comparisons are made in.
    pub fn trimmed(&self) -> &str {
        self.0.trim_matches('/')
    }

    /// True iff this key's trimmed path is a string prefix of `other`'s
    /// trimmed path.
    ///
    /// The relation is reflexive and not generally symmetric. It works on
    /// raw strings, not segment boundaries: `main/col` is part of
    /// `main/col1` even though `col1` is not a child segment of `col`.
    pub fn is_part_of(&self, other: &PlaceholderKey) -> bool {
        other.trimmed().starts_with(self.trimmed())
    }

    /// The portion of the key after the final `/`, or the whole key when it
    /// contains no separator. A key ending in `/` yields the empty string.
    pub fn last_segment(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Whether the key ends in the wildcard marker (`main-*` style keys).
    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with(WILDCARD_SUFFIX)
    }

    /// Length of the raw path in bytes. Used by the validity checker's
    /// longest-match selection.
    pub fn path_len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for PlaceholderKey {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for PlaceholderKey {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl fmt::Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
