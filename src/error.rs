//! Error types for region configuration and segment input validation.
//!
//! The clipping loop itself is total: once a region has been validated and
//! the segment endpoints are finite, no further error can occur.

use thiserror::Error;

/// Errors reported by region construction and segment clipping.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClipError {
    /// The four bounds do not form a valid rectangle. Raised at region
    /// construction time, never mid-algorithm.
    #[error("invalid clip region: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidRegion {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    /// A segment endpoint carries a NaN or infinite coordinate. Rejected
    /// up front rather than letting NaN flow through the outcode tests.
    #[error("non-finite coordinate in segment endpoint ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
