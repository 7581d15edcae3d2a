//! Geometry primitives shared by the transform pipeline.
//!
//! All types are plain `f32` value types in viewport (screen) coordinates
//! with the origin at the top-left corner and y growing downward.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image or viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    ///
    /// An empty size means layout has not run yet or no image is loaded;
    /// every operation in the pipeline treats it as "do nothing".
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle: the crop window, or a derived image bound.
///
/// Valid rectangles have `left <= right` and `top <= bottom`. Callers that
/// may hold an inverted rectangle (e.g. a crop handle dragged across the
/// opposite edge) should pass it through [`Rect::normalized`] first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// True when the rectangle has zero or negative area on either axis.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Return a copy translated by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Return a copy with inverted edges swapped so that `left <= right`
    /// and `top <= bottom` hold.
    pub fn normalized(&self) -> Rect {
        Rect {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }
}

/// The four corners of the image after the current transform.
///
/// Stored as a flat `[x0, y0, x1, y1, x2, y2, x3, y3]` array in a fixed
/// winding order: top-left, top-right, bottom-right, bottom-left. Under
/// rotation the corners are not axis-aligned, so the accessors below return
/// the bounding box of the four points, which is what layout needs.
///
/// Corners are always recomputed from the image's native rectangle through
/// the current matrix, never moved incrementally, so floating-point error
/// cannot accumulate across interactive events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners(pub [f32; 8]);

impl Corners {
    /// The native (untransformed) corners of an image of the given size.
    pub fn of(size: Size) -> Self {
        Corners([
            0.0,
            0.0,
            size.width,
            0.0,
            size.width,
            size.height,
            0.0,
            size.height,
        ])
    }

    pub fn left(&self) -> f32 {
        let p = &self.0;
        p[0].min(p[2]).min(p[4]).min(p[6])
    }

    pub fn top(&self) -> f32 {
        let p = &self.0;
        p[1].min(p[3]).min(p[5]).min(p[7])
    }

    pub fn right(&self) -> f32 {
        let p = &self.0;
        p[0].max(p[2]).max(p[4]).max(p[6])
    }

    pub fn bottom(&self) -> f32 {
        let p = &self.0;
        p[1].max(p[3]).max(p[5]).max(p[7])
    }

    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }

    pub fn height(&self) -> f32 {
        self.bottom() - self.top()
    }

    pub fn center_x(&self) -> f32 {
        (self.left() + self.right()) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top() + self.bottom()) / 2.0
    }

    /// Bounding box of the four corners as a [`Rect`].
    pub fn bounds(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }
}
