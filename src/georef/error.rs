//! Error type for georeferencing resolution.

use thiserror::Error;

/// Errors raised by [`GeoModelResolver::resolve`].
///
/// Recognized-but-unhandled model/code combinations are NOT errors; they
/// come back as [`GeoModel::Unsupported`] data. The only hard failure is
/// structurally invalid metadata.
///
/// [`GeoModelResolver::resolve`]: super::GeoModelResolver::resolve
/// [`GeoModel::Unsupported`]: super::GeoModel::Unsupported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoRefError {
    /// Tie-point or pixel-scale array malformed; fatal to this single
    /// resolution call.
    #[error("Invalid georeferencing: {reason}")]
    InvalidGeoreferencing {
        /// What is wrong with the metadata arrays.
        reason: String,
    },
}
