//! Raster georeferencing model types.

use std::fmt;

/// Geodetic model type declared by a raster's georeferencing metadata.
///
/// The discriminants follow the GeoTIFF `GTModelTypeGeoKey` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    /// Projected coordinate system (grid easting/northing).
    Projected,
    /// Geographic coordinate system (latitude/longitude).
    Geographic,
    /// Geocentric coordinate system (earth-centered XYZ).
    Geocentric,
}

impl ModelType {
    /// Map a raw model-type integer to a known model type.
    ///
    /// Returns `None` for any other value; callers report those as an
    /// unsupported model rather than an error.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ModelType::Projected),
            2 => Some(ModelType::Geographic),
            3 => Some(ModelType::Geocentric),
            _ => None,
        }
    }

    /// The raw GeoTIFF model-type code.
    pub fn code(&self) -> u32 {
        match self {
            ModelType::Projected => 1,
            ModelType::Geographic => 2,
            ModelType::Geocentric => 3,
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelType::Projected => "projected",
            ModelType::Geographic => "geographic",
            ModelType::Geocentric => "geocentric",
        };
        write!(f, "{}", name)
    }
}

/// Geographic bounding box in decimal degrees.
///
/// Edges are named rather than ordered so call sites stay readable:
/// `north`/`south` are latitudes, `west`/`east` longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// North edge latitude.
    pub north: f64,
    /// West edge longitude.
    pub west: f64,
    /// South edge latitude.
    pub south: f64,
    /// East edge longitude.
    pub east: f64,
}

impl GeoBounds {
    /// Create bounds from the four edges.
    pub fn new(north: f64, west: f64, south: f64, east: f64) -> Self {
        Self {
            north,
            west,
            south,
            east,
        }
    }

    /// North-south extent in degrees.
    pub fn height_deg(&self) -> f64 {
        self.north - self.south
    }

    /// East-west extent in degrees.
    pub fn width_deg(&self) -> f64 {
        self.east - self.west
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N{:.6} W{:.6} S{:.6} E{:.6}",
            self.north, self.west, self.south, self.east
        )
    }
}

/// Outcome of resolving a raster's georeferencing metadata.
///
/// `Unsupported` is data, not a fault: structurally valid but unhandled
/// model/code combinations are expected and are rendered as diagnostics
/// by the display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoModel {
    /// The raster was anchored in geographic space.
    Georeferenced {
        /// Geographic extent of the raster.
        bounds: GeoBounds,
        /// Source image width in pixels.
        width: u32,
        /// Source image height in pixels.
        height: u32,
    },
    /// Recognized metadata that the engine cannot georeference.
    Unsupported {
        /// Raw model-type integer from the metadata.
        model_type: u32,
        /// Coordinate-system code from the metadata.
        code: i32,
        /// Human-readable diagnostic naming the unhandled combination.
        message: String,
    },
}

impl GeoModel {
    /// The bounding box, when the raster was georeferenced.
    pub fn bounds(&self) -> Option<&GeoBounds> {
        match self {
            GeoModel::Georeferenced { bounds, .. } => Some(bounds),
            GeoModel::Unsupported { .. } => None,
        }
    }

    /// Whether this outcome is the unsupported diagnostic.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, GeoModel::Unsupported { .. })
    }
}

/// External raster-decoding collaborator that can report pixel
/// dimensions.
///
/// The resolver never decodes pixels itself; when a decoder is on hand
/// it is asked for the dimensions, otherwise the caller supplies them
/// directly.
pub trait RasterDimensions {
    /// Image (width, height) in pixels.
    fn dimensions(&self) -> (u32, u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_from_code() {
        assert_eq!(ModelType::from_code(1), Some(ModelType::Projected));
        assert_eq!(ModelType::from_code(2), Some(ModelType::Geographic));
        assert_eq!(ModelType::from_code(3), Some(ModelType::Geocentric));
        assert_eq!(ModelType::from_code(0), None);
        assert_eq!(ModelType::from_code(7), None);
    }

    #[test]
    fn test_model_type_code_round_trip() {
        for mt in [
            ModelType::Projected,
            ModelType::Geographic,
            ModelType::Geocentric,
        ] {
            assert_eq!(ModelType::from_code(mt.code()), Some(mt));
        }
    }

    #[test]
    fn test_model_type_display() {
        assert_eq!(ModelType::Geographic.to_string(), "geographic");
    }

    #[test]
    fn test_bounds_extents() {
        let bounds = GeoBounds::new(43.0, -95.0, 42.0, -94.0);
        assert!((bounds.height_deg() - 1.0).abs() < 1e-12);
        assert!((bounds.width_deg() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_display() {
        let bounds = GeoBounds::new(43.0, -95.0, 42.0, -94.0);
        let text = bounds.to_string();
        assert!(text.contains("N43.000000"));
        assert!(text.contains("W-95.000000"));
    }

    #[test]
    fn test_geo_model_accessors() {
        let georeferenced = GeoModel::Georeferenced {
            bounds: GeoBounds::new(1.0, 2.0, 3.0, 4.0),
            width: 10,
            height: 20,
        };
        assert!(!georeferenced.is_unsupported());
        assert!(georeferenced.bounds().is_some());

        let unsupported = GeoModel::Unsupported {
            model_type: 2,
            code: 9999,
            message: "Unsupported geographic coordinate system 9999".to_string(),
        };
        assert!(unsupported.is_unsupported());
        assert!(unsupported.bounds().is_none());
    }
}
