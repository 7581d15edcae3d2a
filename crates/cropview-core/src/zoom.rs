//! Auto-zoom policy.
//!
//! Keeps the crop window's covered area at roughly 50%-65% of the zoomed
//! visible area. The tolerance is intentionally expressed as two
//! independent one-sided checks rather than a hard band, so a single call
//! corrects at most one direction:
//!
//! - Zoom in when the window is smaller than the viewport on both axes and
//!   there is zoom headroom left
//! - Zoom out when the window exceeds the viewport on either axis and the
//!   view is zoomed in at all
//!
//! Both candidates resolve to `min(viewport / (crop / zoom))` over the two
//! axes, i.e. the zoom at which the crop window would exactly fill the
//! viewport on its limiting axis, clamped to the legal range.

use crate::geom::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Current zoom level and its configured upper bound.
///
/// The lower bound is fixed at [`ZoomState::MIN`]: zoom 1 means the image
/// is fit to the viewport with no magnification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub current: f32,
    pub max: f32,
}

impl ZoomState {
    /// The fixed lower zoom bound.
    pub const MIN: f32 = 1.0;

    pub fn new(max: f32) -> Self {
        ZoomState {
            current: Self::MIN,
            max,
        }
    }
}

/// Decide whether the zoom level should change for the given crop window.
///
/// Evaluated on every committed crop-window change, so the zoom tracks
/// window resizes continuously while auto-zoom is on. When auto-zoom is
/// off the candidate is forced to exactly 1: disabling the mode actively
/// un-zooms instead of freezing the current level.
///
/// # Returns
///
/// `Some(new_zoom)` when the zoom should change, `None` otherwise. The
/// returned value is always within `[1, state.max]`.
///
/// Degenerate input (empty crop rectangle or viewport) yields `None`; the
/// divisions below are never taken with a zero denominator.
pub fn solve_zoom(crop: Rect, viewport: Size, state: ZoomState, auto_zoom: bool) -> Option<f32> {
    if viewport.is_empty() || crop.is_empty() {
        return None;
    }

    let mut new_zoom = 0.0;
    // The zoom at which the crop window exactly fills the limiting axis
    let limit = (viewport.width / (crop.width() / state.current))
        .min(viewport.height / (crop.height() / state.current));

    if state.current < state.max
        && crop.width() < viewport.width
        && crop.height() < viewport.height
    {
        new_zoom = state.max.min(limit);
    }
    if state.current > ZoomState::MIN
        && (crop.width() > viewport.width || crop.height() > viewport.height)
    {
        new_zoom = ZoomState::MIN.max(limit);
    }
    if !auto_zoom {
        new_zoom = ZoomState::MIN;
    }

    if new_zoom > 0.0 && new_zoom != state.current {
        Some(new_zoom)
    } else {
        None
    }
}
