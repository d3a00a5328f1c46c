//! Geodetic reference resolution for raster georeferencing metadata.
//!
//! The entry point is [`GeoModelResolver`], which turns a raster's
//! declared model type, coordinate-system code, tie points and pixel
//! scale into a [`GeoBounds`] for the tiling layer, or a
//! [`GeoModel::Unsupported`] diagnostic for combinations the engine
//! does not georeference.

mod error;
mod model;
mod resolver;

pub use error::GeoRefError;
pub use model::{GeoBounds, GeoModel, ModelType, RasterDimensions};
pub use resolver::{GeoModelResolver, ModelHandler, RasterGeoref, WGS84_GEOGRAPHIC_CODE};
