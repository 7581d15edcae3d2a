//! Image placement: the composed viewport transform.
//!
//! This module builds the affine matrix that places the source image in the
//! viewport. The build is an ordered pipeline; each stage pivots on the
//! bounding box produced by the stage before it, so the order is fixed:
//!
//! 1. Center the native image rectangle in the viewport
//! 2. Rotate about the centered corners' center
//! 3. Fit-scale to the viewport (gated by the scale mode)
//! 4. Zoom-scale, with flips folded in as negative factors
//! 5. Translate by the persisted pan offset
//!
//! # Coordinate System
//!
//! - Origin is the viewport's top-left corner, y grows downward
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - The pan offset is in pre-zoom-scale units

mod builder;

pub use builder::{place_image, Placement};
