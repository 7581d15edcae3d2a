//! Pan offset resolution.
//!
//! The pan offset selects which part of an over-sized (zoomed) image is
//! visible in the viewport. It is kept in pre-zoom-scale units so the same
//! stored value stays meaningful as the zoom level changes; both solvers
//! here divide by the axis scale factors on the way out.
//!
//! Two modes:
//!
//! - **Center**: right after a zoom change, recenter the zoomed region on
//!   the crop window without revealing empty space beyond the image edges.
//! - **Clamp**: for a plain re-layout, keep the previous pan but slide the
//!   visible region just enough that the crop window is back inside it.
//!
//! Both are idempotent: solving twice with the same inputs yields the same
//! offset.

use crate::geom::{Corners, Rect, Size};
use serde::{Deserialize, Serialize};

/// Translation applied after all scaling, in pre-zoom-scale units.
///
/// The only piece of state besides the zoom level that survives across
/// recomputation passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: PanOffset = PanOffset { x: 0.0, y: 0.0 };
}

/// Recenter the zoomed region on the crop window.
///
/// Per axis: when the zoomed image is smaller than the viewport there is
/// no room to pan and the offset is 0. Otherwise the candidate is the
/// distance from the crop window's center to the viewport's center,
/// bounded so the image's near edge never moves past the viewport's near
/// edge and its far edge never moves past the viewport's far edge.
///
/// The min-then-max evaluation order is deliberate and load-bearing: for
/// degenerate inputs where the bounds cross, min-then-max resolves to the
/// far bound where the reversed order would resolve to the near bound.
/// Call sites depend on this tie-break, so it must not be rewritten as a
/// symmetric clamp.
///
/// `corners` and `crop` are both in viewport space with zoom applied but
/// before any pan translation.
pub fn center_pan(corners: &Corners, crop: Rect, viewport: Size, scale_x: f32, scale_y: f32) -> PanOffset {
    let x = if viewport.width > corners.width() || scale_x == 0.0 {
        0.0
    } else {
        (viewport.width / 2.0 - crop.center_x())
            .min(-corners.left())
            .max(viewport.width - corners.right())
            / scale_x
    };
    let y = if viewport.height > corners.height() || scale_y == 0.0 {
        0.0
    } else {
        (viewport.height / 2.0 - crop.center_y())
            .min(-corners.top())
            .max(viewport.height - corners.bottom())
            / scale_y
    };
    PanOffset { x, y }
}

/// Keep the previous pan, adjusted so the crop window stays inside the
/// visible region.
///
/// Used when an external change (viewport resize, window drag past the
/// edge) may have pushed the crop window outside the rendered image; the
/// existing offset is scaled into pixel units, clamped per axis against
/// the crop rectangle's edges, and converted back.
///
/// `crop` is in viewport space with zoom applied but before any pan
/// translation.
pub fn clamp_pan(prev: PanOffset, crop: Rect, viewport: Size, scale_x: f32, scale_y: f32) -> PanOffset {
    let x = if scale_x == 0.0 {
        prev.x
    } else {
        (prev.x * scale_x)
            .max(-crop.left)
            .min(viewport.width - crop.right)
            / scale_x
    };
    let y = if scale_y == 0.0 {
        prev.y
    } else {
        (prev.y * scale_y)
            .max(-crop.top)
            .min(viewport.height - crop.bottom)
            / scale_y
    };
    PanOffset { x, y }
}
