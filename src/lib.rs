//! A 2D line clipping primitive for rendering and CAD pipelines.
//!
//! This crate clips line segments against an axis-aligned rectangular
//! region using the Cohen–Sutherland algorithm: both endpoints are
//! classified with 4-bit outcodes, and the segment is iteratively trimmed
//! against one region boundary at a time until it is trivially accepted
//! (fully inside) or trivially rejected (fully outside on one side).
//!
//! # Quick Start
//!
//! ```
//! use linesnip::prelude::*;
//!
//! let region = ClipRegion::new(-100.0, 100.0, -100.0, 100.0)?;
//! let clipper = LineClipper::new(region);
//!
//! match clipper.clip_line(-180.0, 40.0, 50.0, 10.0)? {
//!     ClipResult::Accepted(segment) => {
//!         println!("visible from {:?} to {:?}", segment.a, segment.b);
//!     }
//!     ClipResult::Rejected => println!("fully outside"),
//! }
//! # Ok::<(), linesnip::ClipError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod error;
pub mod math;
pub mod region;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipResult, LineClipper, Outcode, Segment};
pub use error::ClipError;
pub use region::ClipRegion;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use linesnip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{ClipResult, LineClipper, Outcode, Segment};

    // Region & errors
    pub use crate::error::ClipError;
    pub use crate::region::ClipRegion;

    // Math
    pub use crate::math::vec2::Vec2;
}
