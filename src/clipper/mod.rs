//! Line clipping against an axis-aligned rectangular region.
//!
//! The implementation is the classic Cohen–Sutherland algorithm, split in
//! two layers:
//!
//! - [`outcode`]: classifies a point into a 4-bit region code describing
//!   which sides of the region it lies outside of.
//!
//! - [`cohen_sutherland`]: the iterative classify-and-trim loop that
//!   accepts, rejects, or trims a segment against one boundary at a time.

pub mod cohen_sutherland;
pub mod outcode;

// Re-export the public clipping API
pub use cohen_sutherland::{ClipResult, LineClipper, Segment};
pub use outcode::Outcode;
