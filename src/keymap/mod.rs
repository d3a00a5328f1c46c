//! Symbolic key ↔ integer code tables for coordinate reference systems.
//!
//! A [`KeyMap`] is a two-way lookup table for one CRS key category
//! (datums, ellipsoids, geographic coordinate systems, ...), loaded from
//! a flat key=value resource. Values may alias another key in the same
//! table by starting with `$`; aliasing is exactly one level deep.
//!
//! [`KeyRegistry`] collects named key maps and is the single point of
//! truth for resolving GeoTIFF/EPSG key codes throughout the engine.

pub mod registry;
pub mod resources;

pub use registry::{categories, KeyRegistry};

use std::collections::HashMap;
use std::path::Path;

use ini::Ini;
use thiserror::Error;

/// Marker prefix for alias values (`WGS_84=$GCS_WGS_84`).
pub const ALIAS_MARKER: char = '$';

/// Errors raised while loading or interrogating key maps.
#[derive(Debug, Error)]
pub enum KeyMapError {
    /// The named resource cannot be located.
    #[error("Key map resource not found: {0}")]
    ResourceMissing(String),

    /// The resource text is not valid key=value data.
    #[error("Malformed key map resource: {0}")]
    Parse(#[from] ini::ParseError),

    /// A resolved value that should be an integer code is not parseable.
    #[error("Value for key '{key}' is not an integer code: '{value}'")]
    MalformedCode { key: String, value: String },
}

/// Two-way symbolic-name ↔ integer-code table for one CRS key category.
///
/// The forward map holds the resource entries verbatim. The inverse map
/// (value → key) is derived once at load time from direct (non-alias)
/// entries only, first-seen value wins, and is never mutated afterward.
#[derive(Debug, Clone)]
pub struct KeyMap {
    entries: HashMap<String, String>,
    inverse: HashMap<String, String>,
}

impl KeyMap {
    /// Load a key map from a bundled resource by logical path.
    ///
    /// # Errors
    ///
    /// [`KeyMapError::ResourceMissing`] if no bundled resource exists at
    /// `logical_path`; [`KeyMapError::Parse`] if the resource text is
    /// malformed.
    pub fn load(logical_path: &str) -> Result<Self, KeyMapError> {
        let text = resources::lookup(logical_path)
            .ok_or_else(|| KeyMapError::ResourceMissing(logical_path.to_string()))?;
        Self::from_str_source(text)
    }

    /// Load a key map from a file on disk.
    ///
    /// File-system variant of [`KeyMap::load`] for user-supplied tables.
    /// An unreadable path fails closed with
    /// [`KeyMapError::ResourceMissing`].
    pub fn load_from_file(path: &Path) -> Result<Self, KeyMapError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| KeyMapError::ResourceMissing(path.display().to_string()))?;
        Self::from_str_source(&text)
    }

    /// Parse a key map from flat key=value text.
    pub fn from_str_source(text: &str) -> Result<Self, KeyMapError> {
        let ini = Ini::load_from_str(text)?;

        let mut entries = HashMap::new();
        let mut inverse = HashMap::new();

        // rust-ini preserves source order, which the first-seen-wins
        // inverse rule depends on
        if let Some(props) = ini.section(None::<String>) {
            for (key, value) in props.iter() {
                entries.insert(key.to_string(), value.to_string());
                if !value.starts_with(ALIAS_MARKER) {
                    inverse
                        .entry(value.to_string())
                        .or_insert_with(|| key.to_string());
                }
            }
        }

        Ok(Self { entries, inverse })
    }

    /// Get the raw stored value for `key`, without alias resolution.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get the value for `key`, following at most one level of aliasing.
    ///
    /// A value starting with `$` is replaced by one more lookup on the
    /// remainder; a second-level alias is returned unresolved, and an
    /// alias pointing at a missing key resolves to `None`.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let raw = self.entries.get(key)?;
        match raw.strip_prefix(ALIAS_MARKER) {
            Some(target) => self.entries.get(target).map(String::as_str),
            None => Some(raw.as_str()),
        }
    }

    /// Get the integer code for `key`, or -1 when the key is absent.
    ///
    /// # Errors
    ///
    /// [`KeyMapError::MalformedCode`] when the resolved value does not
    /// parse as an integer. Never coerced silently.
    pub fn code_of(&self, key: &str) -> Result<i32, KeyMapError> {
        match self.resolve(key) {
            None => Ok(-1),
            Some(value) => {
                value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| KeyMapError::MalformedCode {
                        key: key.to_string(),
                        value: value.to_string(),
                    })
            }
        }
    }

    /// Get the symbolic key for an integer code.
    ///
    /// Looks up the inverse table by the code's canonical decimal form;
    /// only direct (non-alias) entries participate.
    pub fn key_of(&self, code: i32) -> Option<&str> {
        self.inverse.get(&code.to_string()).map(String::as_str)
    }

    /// Number of entries in the forward table (aliases included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the forward table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
