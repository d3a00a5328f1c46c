//! Integration tests for the georeferencing flow.
//!
//! These tests verify the complete raster-loading data flow:
//! - Raster metadata → GeoModelResolver → bounding box
//! - Coordinate-system codes → KeyRegistry → symbolic keys
//! - Unsupported models → displayable diagnostics
//!
//! Run with: `cargo test --test georeference_integration`

use std::sync::Arc;

use geolayer::georef::{GeoModel, GeoModelResolver, GeoRefError, RasterDimensions};
use geolayer::keymap::{categories, KeyMap, KeyRegistry};

// ============================================================================
// Test Helpers
// ============================================================================

/// Resolver over the standard bundled key tables.
fn standard_resolver() -> GeoModelResolver {
    let registry = KeyRegistry::standard().expect("bundled tables must load");
    GeoModelResolver::new(Arc::new(registry))
}

/// Stand-in for a raster decoder reporting fixed dimensions.
struct StubRaster {
    width: u32,
    height: u32,
}

impl RasterDimensions for StubRaster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

// ============================================================================
// WGS-84 raster loading
// ============================================================================

#[test]
fn wgs84_raster_yields_bounding_box() {
    let resolver = standard_resolver();

    // A 512x512 raster anchored at 48°N 2°E, 0.001°/pixel
    let model = resolver
        .resolve(
            2,
            4326,
            &[0.0, 0.0, 0.0, 2.0, 48.0, 0.0],
            &[0.001, 0.001, 0.0],
            512,
            512,
        )
        .unwrap();

    let bounds = model.bounds().expect("WGS-84 raster must georeference");
    assert!((bounds.north - 48.0).abs() < 1e-12);
    assert!((bounds.west - 2.0).abs() < 1e-12);
    assert!((bounds.south - 47.488).abs() < 1e-12);
    assert!((bounds.east - 2.512).abs() < 1e-12);
}

#[test]
fn decoder_collaborator_supplies_dimensions() {
    let resolver = standard_resolver();
    let raster = StubRaster {
        width: 256,
        height: 128,
    };

    let model = resolver
        .resolve_with(
            2,
            4326,
            &[0.0, 0.0, 0.0, -10.0, 51.0, 0.0],
            &[0.01, 0.01, 0.0],
            &raster,
        )
        .unwrap();

    match model {
        GeoModel::Georeferenced { width, height, .. } => {
            assert_eq!((width, height), (256, 128));
        }
        GeoModel::Unsupported { message, .. } => panic!("unexpected diagnostic: {}", message),
    }
}

// ============================================================================
// Unsupported models degrade to diagnostics
// ============================================================================

#[test]
fn projected_raster_reports_symbolic_key() {
    let resolver = standard_resolver();

    let model = resolver
        .resolve(
            1,
            27700,
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[1.0, 1.0, 0.0],
            1024,
            1024,
        )
        .unwrap();

    match model {
        GeoModel::Unsupported { message, code, .. } => {
            assert_eq!(code, 27700);
            assert!(message.contains("27700"));
            assert!(
                message.contains("PCS_British_National_Grid"),
                "diagnostic should name the registry key, was: {}",
                message
            );
        }
        GeoModel::Georeferenced { .. } => panic!("projected rasters are not georeferenced"),
    }
}

#[test]
fn unknown_code_reports_without_symbolic_key() {
    let resolver = standard_resolver();

    let model = resolver
        .resolve(
            2,
            9999,
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[1.0, 1.0, 0.0],
            64,
            64,
        )
        .unwrap();

    match model {
        GeoModel::Unsupported { message, .. } => {
            assert!(message.contains("9999"));
        }
        GeoModel::Georeferenced { .. } => panic!("9999 is not a handled code"),
    }
}

#[test]
fn malformed_metadata_is_the_only_hard_failure() {
    let resolver = standard_resolver();

    let err = resolver
        .resolve(2, 4326, &[0.0, 0.0, 0.0], &[0.01, 0.01, 0.0], 100, 100)
        .unwrap_err();
    assert!(matches!(err, GeoRefError::InvalidGeoreferencing { .. }));

    // Everything structurally valid resolves to data, never an error
    for model_type in [0, 1, 2, 3, 4, 99] {
        for code in [-1, 0, 4326, 4269, 32610, 123456] {
            let result = resolver.resolve(
                model_type,
                code,
                &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                &[1.0, 1.0, 0.0],
                10,
                10,
            );
            assert!(
                result.is_ok(),
                "model {} code {} must not fail",
                model_type,
                code
            );
        }
    }
}

// ============================================================================
// Registry-backed code resolution
// ============================================================================

#[test]
fn registry_round_trips_codes_and_keys() {
    let registry = KeyRegistry::standard().unwrap();

    let code = registry
        .code_of(categories::GEOGRAPHIC_CS, "GCS_WGS_84")
        .unwrap();
    assert_eq!(code, 4326);
    assert_eq!(
        registry.key_of(categories::GEOGRAPHIC_CS, code),
        Some("GCS_WGS_84".to_string())
    );
}

#[test]
fn registry_alias_lookup_matches_direct_lookup() {
    let registry = KeyRegistry::standard().unwrap();

    let direct = registry
        .code_of(categories::GEOGRAPHIC_CS, "GCS_NAD27")
        .unwrap();
    let aliased = registry.code_of(categories::GEOGRAPHIC_CS, "NAD27").unwrap();
    assert_eq!(direct, aliased);
    assert_eq!(direct, 4267);
}

#[test]
fn user_supplied_table_extends_the_registry() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "LOCAL_GRID_A=9001").unwrap();
    writeln!(file, "LOCAL_GRID_B=9002").unwrap();

    let map = KeyMap::load_from_file(file.path()).unwrap();
    let mut registry = KeyRegistry::standard().unwrap();
    registry.add_key_map("site_grids", Arc::new(map));

    assert_eq!(registry.code_of("site_grids", "LOCAL_GRID_A").unwrap(), 9001);
    assert_eq!(
        registry.key_of("site_grids", 9002),
        Some("LOCAL_GRID_B".to_string())
    );
}
