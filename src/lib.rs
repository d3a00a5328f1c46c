//! GeoLayer - map engine core for desktop GIS applications.
//!
//! This library provides the non-visual core of an interactive mapping
//! toolkit: geodetic reference resolution for raster layers, an
//! identity-keyed artifact cache for tile factories, and a temporal
//! index for track playback.
//!
//! # Overview
//!
//! A raster loader hands its georeferencing metadata to
//! [`georef::GeoModelResolver`], which resolves coordinate-system codes
//! through a [`keymap::KeyRegistry`] and yields the raster's geographic
//! bounding box (or a reportable unsupported-model diagnostic). The
//! tiling layer stores decoded artifacts in a [`cache::IdentityCache`]
//! keyed by tile identity. The track subsystem feeds time-stamped
//! positions into a [`temporal::TemporalIndex`], which the playback
//! layer queries per displayed time step.
//!
//! ```
//! use std::sync::Arc;
//! use geolayer::georef::GeoModelResolver;
//! use geolayer::keymap::KeyRegistry;
//!
//! let registry = Arc::new(KeyRegistry::standard()?);
//! let resolver = GeoModelResolver::new(registry);
//!
//! // One tie point at pixel (0,0), 0.01°/pixel, 100x100 image
//! let model = resolver.resolve(
//!     2,
//!     4326,
//!     &[0.0, 0.0, 0.0, -95.0, 43.0, 0.0],
//!     &[0.01, 0.01, 0.0],
//!     100,
//!     100,
//! )?;
//! assert!(model.bounds().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! All components are synchronous and single-threaded by design;
//! callers that share them across threads serialize access externally.

pub mod cache;
pub mod geo;
pub mod georef;
pub mod keymap;
pub mod logging;
pub mod temporal;

/// Version of the GeoLayer library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
