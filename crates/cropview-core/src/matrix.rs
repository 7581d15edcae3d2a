//! 2D affine transform matrix.
//!
//! A 2x3 row-major affine matrix:
//!
//! ```text
//! |x'|   |a b c| |x|
//! |y'| = |d e f| |y|
//! |1 |   |0 0 1| |1|
//! ```
//!
//! Operations are post-concatenated: each `post_*` call applies its step
//! *after* everything already in the matrix, which is the order the
//! transform pipeline composes its stages in. The pipeline always rebuilds
//! the matrix from identity on every pass rather than amending the previous
//! one, so rounding error never compounds across interactive events.

use crate::geom::{Corners, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from transform computation.
///
/// Steady-state layout code absorbs these as no-ops (a stale frame beats a
/// crash mid-gesture); they exist so callers can tell the two apart.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The matrix has no inverse (zero determinant).
    #[error("transform matrix is not invertible")]
    NotInvertible,

    /// Image or viewport size is zero/negative; nothing can be placed.
    #[error("image or viewport size is empty")]
    EmptyInput,
}

/// A composable 2D affine transform (scale, rotate, translate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// Concatenate `m` after `self`: the result applies `self` first.
    fn post_concat(&mut self, m: Matrix) {
        *self = Matrix {
            a: m.a * self.a + m.b * self.d,
            b: m.a * self.b + m.b * self.e,
            c: m.a * self.c + m.b * self.f + m.c,
            d: m.d * self.a + m.e * self.d,
            e: m.d * self.b + m.e * self.e,
            f: m.d * self.c + m.e * self.f + m.f,
        };
    }

    /// Append a translation by `(dx, dy)`.
    pub fn post_translate(&mut self, dx: f32, dy: f32) {
        self.post_concat(Matrix {
            a: 1.0,
            b: 0.0,
            c: dx,
            d: 0.0,
            e: 1.0,
            f: dy,
        });
    }

    /// Append a scale by `(sx, sy)` about the pivot `(px, py)`.
    ///
    /// Negative factors mirror about the pivot axis, which is how flips are
    /// expressed in the pipeline's zoom stage.
    pub fn post_scale(&mut self, sx: f32, sy: f32, px: f32, py: f32) {
        self.post_concat(Matrix {
            a: sx,
            b: 0.0,
            c: px - sx * px,
            d: 0.0,
            e: sy,
            f: py - sy * py,
        });
    }

    /// Append a rotation by `degrees` about the pivot `(px, py)`.
    ///
    /// Positive angles rotate clockwise on screen (y grows downward).
    pub fn post_rotate(&mut self, degrees: f32, px: f32, py: f32) {
        let r = degrees.to_radians();
        let (sin, cos) = r.sin_cos();
        self.post_concat(Matrix {
            a: cos,
            b: -sin,
            c: px - cos * px + sin * py,
            d: sin,
            e: cos,
            f: py - sin * px - cos * py,
        });
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }

    /// Map all four corner points through the matrix.
    pub fn map_corners(&self, corners: &Corners) -> Corners {
        let mut out = [0.0f32; 8];
        for (i, pair) in corners.0.chunks(2).enumerate() {
            let (x, y) = self.map_point(pair[0], pair[1]);
            out[i * 2] = x;
            out[i * 2 + 1] = y;
        }
        Corners(out)
    }

    /// Map a rectangle and return the bounding box of its mapped corners.
    ///
    /// Under rotation or negative scale the image of an axis-aligned rect
    /// is not axis-aligned; the bounding box is returned, always with
    /// `left <= right` and `top <= bottom`.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let corners = self.map_corners(&Corners([
            rect.left,
            rect.top,
            rect.right,
            rect.top,
            rect.right,
            rect.bottom,
            rect.left,
            rect.bottom,
        ]));
        corners.bounds()
    }

    /// Compute the inverse transform.
    pub fn inverse(&self) -> Result<Matrix, TransformError> {
        let det = self.a * self.e - self.b * self.d;
        if det.abs() < 1e-8 {
            return Err(TransformError::NotInvertible);
        }

        let a = self.e / det;
        let b = -self.b / det;
        let d = -self.d / det;
        let e = self.a / det;
        Ok(Matrix {
            a,
            b,
            c: -(a * self.c + b * self.f),
            d,
            e,
            f: -(d * self.c + e * self.f),
        })
    }

    /// The matrix elements as `[a, b, c, d, e, f]`.
    pub fn elements(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}
