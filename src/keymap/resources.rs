//! Bundled key map resources.
//!
//! The standard EPSG/GeoTIFF tables ship inside the binary and are
//! addressed by logical path. Lookup fails closed: an unknown path is
//! reported as missing by the caller, never defaulted.

/// Logical path → embedded resource text.
static BUNDLED: &[(&str, &str)] = &[
    (
        "epsg/coord_transform.properties",
        include_str!("../../resources/epsg/coord_transform.properties"),
    ),
    (
        "epsg/datum.properties",
        include_str!("../../resources/epsg/datum.properties"),
    ),
    (
        "epsg/ellipsoid.properties",
        include_str!("../../resources/epsg/ellipsoid.properties"),
    ),
    (
        "epsg/geographic_cs.properties",
        include_str!("../../resources/epsg/geographic_cs.properties"),
    ),
    (
        "epsg/geokey.properties",
        include_str!("../../resources/epsg/geokey.properties"),
    ),
    (
        "epsg/prime_meridian.properties",
        include_str!("../../resources/epsg/prime_meridian.properties"),
    ),
    (
        "epsg/projected_cs.properties",
        include_str!("../../resources/epsg/projected_cs.properties"),
    ),
    (
        "epsg/projection.properties",
        include_str!("../../resources/epsg/projection.properties"),
    ),
    (
        "epsg/units.properties",
        include_str!("../../resources/epsg/units.properties"),
    ),
    (
        "epsg/vertical_cs.properties",
        include_str!("../../resources/epsg/vertical_cs.properties"),
    ),
];

/// Get the text of a bundled resource by logical path.
pub fn lookup(logical_path: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(path, _)| *path == logical_path)
        .map(|(_, text)| *text)
}

/// Logical paths of all bundled resources.
pub fn paths() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(path, _)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_path() {
        let text = lookup("epsg/geographic_cs.properties").unwrap();
        assert!(text.contains("GCS_WGS_84=4326"));
    }

    #[test]
    fn test_lookup_unknown_path() {
        assert!(lookup("epsg/bogus.properties").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_all_paths_resolve() {
        for path in paths() {
            assert!(lookup(path).is_some(), "bundled path {path} must resolve");
        }
    }

    #[test]
    fn test_bundled_resources_are_nonempty() {
        for path in paths() {
            let text = lookup(path).unwrap();
            assert!(
                text.lines().any(|line| line.contains('=')),
                "{path} should carry at least one entry"
            );
        }
    }
}
