//! Spherical navigation math.
//!
//! Great-circle helpers used by the temporal track interpolation. All
//! positions are (latitude, longitude) pairs in decimal degrees on a
//! spherical earth model.

use std::f64::consts::PI;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Separations below this angle (radians) are treated as coincident.
const MIN_ANGLE_RAD: f64 = 1e-12;

/// Calculate the central angle between two positions in radians.
///
/// Uses the haversine formula, which stays accurate for small
/// separations.
///
/// # Example
///
/// ```
/// use geolayer::geo::central_angle;
///
/// // One degree of latitude subtends one degree of arc
/// let angle = central_angle((0.0, 0.0), (1.0, 0.0));
/// assert!((angle.to_degrees() - 1.0).abs() < 1e-9);
/// ```
pub fn central_angle(from: (f64, f64), to: (f64, f64)) -> f64 {
    let lat1 = from.0 * DEG_TO_RAD;
    let lat2 = to.0 * DEG_TO_RAD;
    let delta_lat = (to.0 - from.0) * DEG_TO_RAD;
    let delta_lon = (to.1 - from.1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * a.sqrt().asin()
}

/// Calculate the point at `fraction` along the great circle from `from`
/// to `to`.
///
/// `fraction` 0.0 yields `from`, 1.0 yields `to`. Coincident or
/// near-coincident endpoints return `from`. Antipodal endpoints have no
/// unique great circle; the result for them is numerically unstable and
/// callers should not rely on it.
///
/// # Example
///
/// ```
/// use geolayer::geo::intermediate_point;
///
/// // Halfway along the equator from 0°E to 10°E
/// let (lat, lon) = intermediate_point((0.0, 0.0), (0.0, 10.0), 0.5);
/// assert!(lat.abs() < 1e-9);
/// assert!((lon - 5.0).abs() < 1e-9);
/// ```
pub fn intermediate_point(from: (f64, f64), to: (f64, f64), fraction: f64) -> (f64, f64) {
    let d = central_angle(from, to);
    if d < MIN_ANGLE_RAD {
        return from;
    }

    let lat1 = from.0 * DEG_TO_RAD;
    let lon1 = from.1 * DEG_TO_RAD;
    let lat2 = to.0 * DEG_TO_RAD;
    let lon2 = to.1 * DEG_TO_RAD;

    // Spherical linear interpolation between the two position vectors
    let a = ((1.0 - fraction) * d).sin() / d.sin();
    let b = (fraction * d).sin() / d.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt()) * RAD_TO_DEG;
    let lon = y.atan2(x) * RAD_TO_DEG;

    (lat, lon)
}

/// Sample the great-circle path from `from` to `to` at `segments` equal
/// arc steps.
///
/// Returns `segments + 1` positions including both endpoints. `segments`
/// must be at least 1.
pub fn great_circle_path(from: (f64, f64), to: (f64, f64), segments: usize) -> Vec<(f64, f64)> {
    debug_assert!(segments >= 1, "path needs at least one segment");
    (0..=segments)
        .map(|i| intermediate_point(from, to, i as f64 / segments as f64))
        .collect()
}
