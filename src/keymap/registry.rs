//! Registry of named key maps.
//!
//! A [`KeyRegistry`] owns one [`KeyMap`] per category name and is the
//! engine's single point of truth for GeoTIFF/EPSG code resolution.
//! Several category names may share the identical map instance (the unit
//! categories do), so lookups under any of the names resolve through the
//! same table.
//!
//! # Thread Safety
//!
//! The registry is designed for a single-writer initialization phase:
//! build and register on one thread, then share read-only (typically
//! behind an `Arc`). It provides no internal locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{KeyMap, KeyMapError};

/// Standard category names registered by [`KeyRegistry::standard`].
pub mod categories {
    /// Geodetic datums.
    pub const DATUM: &str = "datum";
    /// Reference ellipsoids.
    pub const ELLIPSOID: &str = "ellipsoid";
    /// Geographic (lat/lon) coordinate systems.
    pub const GEOGRAPHIC_CS: &str = "geographic_cs";
    /// Projected coordinate systems.
    pub const PROJECTED_CS: &str = "projected_cs";
    /// Prime meridians.
    pub const PRIME_MERIDIAN: &str = "prime_meridian";
    /// Projection (map grid) methods.
    pub const PROJECTION: &str = "projection";
    /// Vertical coordinate systems.
    pub const VERTICAL_CS: &str = "vertical_cs";
    /// Coordinate transformation methods.
    pub const COORD_TRANSFORM: &str = "coord_transform";
    /// GeoTIFF key identifiers.
    pub const GEOKEY: &str = "geokey";
    /// Units of measure (shared table).
    pub const UNITS: &str = "units";
    /// Angular units, aliased to the shared units table.
    pub const ANGULAR_UNITS: &str = "angular_units";
    /// Linear units, aliased to the shared units table.
    pub const LINEAR_UNITS: &str = "linear_units";
}

/// (category, bundled resource) pairs for the independently loaded
/// standard categories. The unit categories are registered separately so
/// they can share one map instance.
const STANDARD_CATEGORIES: &[(&str, &str)] = &[
    (categories::DATUM, "epsg/datum.properties"),
    (categories::ELLIPSOID, "epsg/ellipsoid.properties"),
    (categories::GEOGRAPHIC_CS, "epsg/geographic_cs.properties"),
    (categories::PROJECTED_CS, "epsg/projected_cs.properties"),
    (categories::PRIME_MERIDIAN, "epsg/prime_meridian.properties"),
    (categories::PROJECTION, "epsg/projection.properties"),
    (categories::VERTICAL_CS, "epsg/vertical_cs.properties"),
    (categories::COORD_TRANSFORM, "epsg/coord_transform.properties"),
    (categories::GEOKEY, "epsg/geokey.properties"),
];

/// Bundled resource backing the shared unit categories.
const UNITS_RESOURCE: &str = "epsg/units.properties";

/// Collection of named [`KeyMap`]s with explicit category aliasing.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    maps: HashMap<String, Arc<KeyMap>>,
}

impl KeyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            maps: HashMap::new(),
        }
    }

    /// Create a registry populated with the standard EPSG/GeoTIFF
    /// categories from bundled resources.
    ///
    /// `units`, `angular_units` and `linear_units` share one map
    /// instance, so a lookup under any of the three names reads the same
    /// table.
    ///
    /// # Errors
    ///
    /// [`KeyMapError::ResourceMissing`] or [`KeyMapError::Parse`] if a
    /// bundled resource fails to load.
    pub fn standard() -> Result<Self, KeyMapError> {
        let mut registry = Self::new();

        for &(category, resource) in STANDARD_CATEGORIES {
            registry.add_key_map_from_resource(category, resource)?;
        }

        let units = Arc::new(KeyMap::load(UNITS_RESOURCE)?);
        registry.add_key_map(categories::UNITS, Arc::clone(&units));
        registry.add_key_map(categories::ANGULAR_UNITS, Arc::clone(&units));
        registry.add_key_map(categories::LINEAR_UNITS, units);

        Ok(registry)
    }

    /// Register a key map under `category`, replacing any existing entry
    /// unconditionally.
    pub fn add_key_map(&mut self, category: impl Into<String>, map: Arc<KeyMap>) {
        let category = category.into();
        debug!(category = %category, entries = map.len(), "registered key map");
        self.maps.insert(category, map);
    }

    /// Load a bundled resource and register it under `category`.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyMapError::ResourceMissing`] (and parse errors)
    /// from the load; the registry's other categories are unaffected.
    pub fn add_key_map_from_resource(
        &mut self,
        category: impl Into<String>,
        logical_path: &str,
    ) -> Result<(), KeyMapError> {
        let map = KeyMap::load(logical_path)?;
        self.add_key_map(category, Arc::new(map));
        Ok(())
    }

    /// Get the key map registered under `category`.
    pub fn get_key_map(&self, category: &str) -> Option<Arc<KeyMap>> {
        self.maps.get(category).map(Arc::clone)
    }

    /// Get the integer code for `key` in the named category.
    ///
    /// An unknown category is a normal outcome and yields `Ok(-1)`, as
    /// does an unknown key within a known category.
    ///
    /// # Errors
    ///
    /// [`KeyMapError::MalformedCode`] propagated from the delegate map.
    pub fn code_of(&self, category: &str, key: &str) -> Result<i32, KeyMapError> {
        match self.maps.get(category) {
            Some(map) => map.code_of(key),
            None => Ok(-1),
        }
    }

    /// Get the symbolic key for `code` in the named category.
    ///
    /// `None` when the category itself is unknown.
    pub fn key_of(&self, category: &str, code: i32) -> Option<String> {
        self.maps
            .get(category)
            .and_then(|map| map.key_of(code))
            .map(String::from)
    }

    /// Registered category names, in arbitrary order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    /// Number of registered categories (aliases counted separately).
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether no categories are registered.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
