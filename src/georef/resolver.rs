//! Geodetic model resolution.
//!
//! Converts raw raster georeferencing metadata (model type, coordinate
//! system code, tie points, pixel scale) into a geographic bounding box,
//! or a structured [`GeoModel::Unsupported`] outcome for combinations
//! the engine does not handle.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::GeoRefError;
use super::model::{GeoBounds, GeoModel, ModelType, RasterDimensions};
use crate::keymap::{categories, KeyRegistry};

/// EPSG code of the WGS-84 geographic coordinate system.
pub const WGS84_GEOGRAPHIC_CODE: i32 = 4326;

/// Minimum tie-point array length (pixel x/y/z + geo x/y/z).
const TIE_POINT_LEN: usize = 6;

/// Minimum pixel-scale array length (x/y/z scale).
const PIXEL_SCALE_LEN: usize = 3;

/// Validated georeferencing inputs handed to a model handler.
#[derive(Debug, Clone, Copy)]
pub struct RasterGeoref<'a> {
    /// Raw model-type integer.
    pub model_type: u32,
    /// Coordinate-system code.
    pub code: i32,
    /// Tie points: pixel-x, pixel-y, pixel-z, geo-x (lon), geo-y (lat),
    /// geo-z. At least six values.
    pub tie_points: &'a [f64],
    /// Per-axis ground distance of one pixel. At least three values.
    pub pixel_scale: &'a [f64],
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Handler computing a [`GeoModel`] for one (model type, code) pair.
pub type ModelHandler = fn(&RasterGeoref<'_>) -> GeoModel;

/// Resolves raster georeferencing metadata against a key registry.
///
/// Dispatch is a `(model type, code) → handler` table rather than
/// branching, so supporting a new coordinate system is one
/// [`register_handler`] call. Out of the box the WGS-84 geographic code
/// is handled for geographic and geocentric rasters; projected rasters
/// are always reported as unsupported diagnostics in the current
/// feature set.
///
/// [`register_handler`]: GeoModelResolver::register_handler
pub struct GeoModelResolver {
    registry: Arc<KeyRegistry>,
    handlers: HashMap<(ModelType, i32), ModelHandler>,
}

impl GeoModelResolver {
    /// Create a resolver with the default WGS-84 handler set.
    pub fn new(registry: Arc<KeyRegistry>) -> Self {
        let mut handlers: HashMap<(ModelType, i32), ModelHandler> = HashMap::new();
        handlers.insert((ModelType::Geographic, WGS84_GEOGRAPHIC_CODE), wgs84_bounds);
        handlers.insert((ModelType::Geocentric, WGS84_GEOGRAPHIC_CODE), wgs84_bounds);
        Self { registry, handlers }
    }

    /// Register (or replace) the handler for a (model type, code) pair.
    pub fn register_handler(&mut self, model_type: ModelType, code: i32, handler: ModelHandler) {
        self.handlers.insert((model_type, code), handler);
    }

    /// Resolve raster metadata to a geographic model.
    ///
    /// Unrecognized but well-formed model/code combinations come back as
    /// [`GeoModel::Unsupported`], a reportable outcome, never an error.
    ///
    /// # Errors
    ///
    /// [`GeoRefError::InvalidGeoreferencing`] when the tie-point array
    /// has fewer than six values or the pixel-scale array fewer than
    /// three. This is the only hard failure.
    pub fn resolve(
        &self,
        model_type: u32,
        code: i32,
        tie_points: &[f64],
        pixel_scale: &[f64],
        width: u32,
        height: u32,
    ) -> Result<GeoModel, GeoRefError> {
        if tie_points.len() < TIE_POINT_LEN {
            return Err(GeoRefError::InvalidGeoreferencing {
                reason: format!(
                    "tie point array has {} values, need at least {}",
                    tie_points.len(),
                    TIE_POINT_LEN
                ),
            });
        }
        if pixel_scale.len() < PIXEL_SCALE_LEN {
            return Err(GeoRefError::InvalidGeoreferencing {
                reason: format!(
                    "pixel scale array has {} values, need at least {}",
                    pixel_scale.len(),
                    PIXEL_SCALE_LEN
                ),
            });
        }

        let georef = RasterGeoref {
            model_type,
            code,
            tie_points,
            pixel_scale,
            width,
            height,
        };

        let Some(kind) = ModelType::from_code(model_type) else {
            // Unknown model type: no code lookup is attempted
            let message = format!("Unsupported coordinate model type {}", model_type);
            debug!(model_type, code, "unsupported raster model");
            return Ok(GeoModel::Unsupported {
                model_type,
                code,
                message,
            });
        };

        if let Some(handler) = self.handlers.get(&(kind, code)) {
            return Ok(handler(&georef));
        }

        let message = self.unsupported_message(kind, code);
        debug!(model_type, code, %message, "unsupported raster model");
        Ok(GeoModel::Unsupported {
            model_type,
            code,
            message,
        })
    }

    /// Resolve using an external raster decoder for the pixel
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Same as [`GeoModelResolver::resolve`].
    pub fn resolve_with(
        &self,
        model_type: u32,
        code: i32,
        tie_points: &[f64],
        pixel_scale: &[f64],
        raster: &dyn RasterDimensions,
    ) -> Result<GeoModel, GeoRefError> {
        let (width, height) = raster.dimensions();
        self.resolve(model_type, code, tie_points, pixel_scale, width, height)
    }

    /// Diagnostic naming the unhandled code and, when the registry knows
    /// it, its symbolic key.
    fn unsupported_message(&self, kind: ModelType, code: i32) -> String {
        let category = match kind {
            ModelType::Projected => categories::PROJECTED_CS,
            ModelType::Geographic | ModelType::Geocentric => categories::GEOGRAPHIC_CS,
        };
        match self.registry.key_of(category, code) {
            Some(key) => format!("Unsupported {} coordinate system {} ({})", kind, code, key),
            None => format!("Unsupported {} coordinate system {}", kind, code),
        }
    }
}

/// Bounding box for a WGS-84 raster with a single tie point and
/// axis-aligned uniform pixel scale.
///
/// Rotation/skew terms are not supported: metadata carrying them
/// produces a geometrically wrong but accepted result. That limitation
/// is inherited from the reference behavior and left as-is.
fn wgs84_bounds(georef: &RasterGeoref<'_>) -> GeoModel {
    let t = georef.tie_points;
    let s = georef.pixel_scale;

    let north = t[4] + t[1] * s[1];
    let west = t[3] - t[0] * s[0];
    let south = t[4] - f64::from(georef.height) * s[1];
    let east = t[3] + f64::from(georef.width) * s[0];

    GeoModel::Georeferenced {
        bounds: GeoBounds::new(north, west, south, east),
        width: georef.width,
        height: georef.height,
    }
}
