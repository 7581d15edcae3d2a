//! Crop window synchronization.
//!
//! [`CropWindowSync`] is the orchestrator that runs on every crop-window
//! change or re-layout request. It owns the only state that survives
//! between invocations (the zoom level, the pan offset, and the last
//! committed matrix); everything else is recomputed fresh from the inputs
//! each pass.
//!
//! An update is either **in-progress** (the user is still dragging a crop
//! handle) or **committed** (the drag settled, or the change was
//! programmatic). In-progress updates never change the zoom; they only
//! re-apply the transform when the window was dragged outside the viewport,
//! so the displayed image keeps covering it. Committed updates run the
//! auto-zoom policy, recenter the view on the window, and report the
//! adjusted rectangle back to the crop-window owner.

use crate::geom::{Corners, Rect, Size};
use crate::matrix::{Matrix, TransformError};
use crate::pan::{center_pan, clamp_pan, PanOffset};
use crate::transform::place_image;
use crate::zoom::{solve_zoom, ZoomState};
use crate::ViewSettings;

/// The sizes a synchronization pass operates on.
///
/// Either size may be empty before an image is loaded or before layout has
/// run; every operation is then a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewContext {
    /// Native image size in pixels.
    pub image: Size,
    /// Viewport size in pixels.
    pub viewport: Size,
}

impl ViewContext {
    pub fn new(image: Size, viewport: Size) -> Self {
        Self { image, viewport }
    }

    fn is_empty(&self) -> bool {
        self.image.is_empty() || self.viewport.is_empty()
    }
}

/// Start and end states of an animated transform transition.
///
/// The core only captures the two snapshots; interpolating between them is
/// the job of an external animation driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub start_matrix: Matrix,
    pub start_corners: Corners,
    pub end_matrix: Matrix,
    pub end_corners: Corners,
}

/// What the display sink should do after a synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncAction {
    /// No geometry change; keep the current matrix.
    None,
    /// Apply the matrix immediately.
    Apply(Matrix),
    /// Animate from the captured start state to the end state.
    Animate(TransformSnapshot),
}

/// Result of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOutcome {
    /// The crop rectangle after the pass, possibly adjusted; the caller
    /// writes this back into the crop-window owner.
    pub crop: Rect,
    /// Matrix disposition for the display sink.
    pub action: SyncAction,
    /// Whether to fire the crop-window-changed notification. Set for every
    /// committed update, never for in-progress ones.
    pub notify: bool,
}

impl SyncOutcome {
    fn unchanged(crop: Rect) -> Self {
        SyncOutcome {
            crop,
            action: SyncAction::None,
            notify: false,
        }
    }
}

/// Orchestrates zoom solving, transform building, and pan solving across
/// crop-window events for one loaded-image session.
#[derive(Debug, Clone, PartialEq)]
pub struct CropWindowSync {
    zoom: f32,
    pan: PanOffset,
    matrix: Matrix,
    corners: Corners,
}

impl Default for CropWindowSync {
    fn default() -> Self {
        Self::new()
    }
}

impl CropWindowSync {
    pub fn new() -> Self {
        CropWindowSync {
            zoom: ZoomState::MIN,
            pan: PanOffset::ZERO,
            matrix: Matrix::identity(),
            corners: Corners::default(),
        }
    }

    /// Current zoom level, always within `[1, max_zoom]`.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current pan offset, in pre-zoom-scale units.
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    /// The last committed matrix.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// The image corners under the last committed matrix.
    pub fn corners(&self) -> Corners {
        self.corners
    }

    /// Discard all session state for a newly loaded image.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Handle a crop-window change.
    ///
    /// For an in-progress change, re-applies the transform (without zoom
    /// change or recentering) only when the window was dragged outside the
    /// viewport bounds, so the rendered image keeps covering it.
    ///
    /// For a committed change, runs the auto-zoom policy when it is enabled
    /// or the view is already zoomed in; a zoom change captures the current
    /// state as the animation start, rebuilds the transform with centering,
    /// and reports either an immediate or an animated transition. The
    /// notification flag is set for every committed update whether or not
    /// the zoom moved.
    ///
    /// An inverted crop rectangle is normalized before use; an empty image
    /// or viewport leaves all state untouched and reports nothing.
    pub fn handle_crop_window_changed(
        &mut self,
        ctx: ViewContext,
        settings: &ViewSettings,
        crop: Rect,
        in_progress: bool,
        animate: bool,
    ) -> SyncOutcome {
        if ctx.is_empty() {
            return SyncOutcome::unchanged(crop);
        }

        let mut crop = crop.normalized();
        let mut action = SyncAction::None;

        if in_progress {
            let outside = crop.left < 0.0
                || crop.top < 0.0
                || crop.right > ctx.viewport.width
                || crop.bottom > ctx.viewport.height;
            if outside {
                if let Ok(adjusted) = self.apply_transform(ctx, settings, crop, false) {
                    crop = adjusted;
                    action = SyncAction::Apply(self.matrix);
                }
            }
            return SyncOutcome {
                crop,
                action,
                notify: false,
            };
        }

        if settings.auto_zoom || self.zoom > ZoomState::MIN {
            let state = ZoomState {
                current: self.zoom,
                max: settings.max_zoom,
            };
            if let Some(new_zoom) = solve_zoom(crop, ctx.viewport, state, settings.auto_zoom) {
                let start_matrix = self.matrix;
                let start_corners = self.corners;
                let prev_zoom = self.zoom;

                self.zoom = new_zoom;
                match self.apply_transform(ctx, settings, crop, true) {
                    Ok(adjusted) => {
                        crop = adjusted;
                        action = if animate {
                            SyncAction::Animate(TransformSnapshot {
                                start_matrix,
                                start_corners,
                                end_matrix: self.matrix,
                                end_corners: self.corners,
                            })
                        } else {
                            SyncAction::Apply(self.matrix)
                        };
                    }
                    Err(_) => {
                        // Leave the prior committed state intact
                        self.zoom = prev_zoom;
                    }
                }
            }
        }

        SyncOutcome {
            crop,
            action,
            notify: true,
        }
    }

    /// Assign the crop window programmatically.
    ///
    /// Treated as a committed, animated change; the returned outcome
    /// carries the rectangle after auto-zoom and recentering.
    pub fn set_crop_window(
        &mut self,
        ctx: ViewContext,
        settings: &ViewSettings,
        crop: Rect,
    ) -> SyncOutcome {
        self.handle_crop_window_changed(ctx, settings, crop, false, true)
    }

    /// Re-apply the transform without running the auto-zoom policy.
    ///
    /// Used when the viewport is resized or a display setting changed
    /// without the crop window itself moving. `center` selects between
    /// recentering the view on the window and merely clamping the existing
    /// pan so the window stays inside the rendered image.
    pub fn relayout(
        &mut self,
        ctx: ViewContext,
        settings: &ViewSettings,
        crop: Rect,
        center: bool,
    ) -> SyncOutcome {
        if ctx.is_empty() {
            return SyncOutcome::unchanged(crop);
        }
        let crop = crop.normalized();
        match self.apply_transform(ctx, settings, crop, center) {
            Ok(adjusted) => SyncOutcome {
                crop: adjusted,
                action: SyncAction::Apply(self.matrix),
                notify: false,
            },
            Err(_) => SyncOutcome::unchanged(crop),
        }
    }

    /// The two-pass transform build.
    ///
    /// The crop rectangle arrives in viewport coordinates under the
    /// previous matrix. It is mapped back to image-relative terms through
    /// the inverse, carried through a no-pan placement to find where it
    /// lands under the new geometry, fed to the pan solver, and finally
    /// offset by the pan actually applied. The placement is then rebuilt
    /// once more with that pan to produce the committed matrix.
    fn apply_transform(
        &mut self,
        ctx: ViewContext,
        settings: &ViewSettings,
        crop: Rect,
        center: bool,
    ) -> Result<Rect, TransformError> {
        let crop_in_image = self.matrix.inverse()?.map_rect(crop);
        let base = place_image(ctx.image, ctx.viewport, settings, self.zoom, PanOffset::ZERO)?;
        let crop = base.matrix.map_rect(crop_in_image);

        let (scale_x, scale_y) = settings.axis_scales(self.zoom);
        self.pan = if center {
            center_pan(&base.corners, crop, ctx.viewport, scale_x, scale_y)
        } else {
            clamp_pan(self.pan, crop, ctx.viewport, scale_x, scale_y)
        };

        let placed = place_image(ctx.image, ctx.viewport, settings, self.zoom, self.pan)?;
        self.matrix = placed.matrix;
        self.corners = placed.corners;
        Ok(crop.offset(self.pan.x * scale_x, self.pan.y * scale_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn ctx() -> ViewContext {
        ViewContext::new(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0))
    }

    /// Run the initial layout pass the host widget performs after an image
    /// loads, with the crop window covering the displayed image.
    fn laid_out(settings: &ViewSettings) -> (CropWindowSync, Rect) {
        let mut sync = CropWindowSync::new();
        let out = sync.relayout(ctx(), settings, Rect::new(0.0, 0.0, 1000.0, 1000.0), false);
        (sync, out.crop)
    }

    fn assert_rect_close(actual: Rect, expected: Rect) {
        for (a, e) in [
            (actual.left, expected.left),
            (actual.top, expected.top),
            (actual.right, expected.right),
            (actual.bottom, expected.bottom),
        ] {
            assert!((a - e).abs() < EPS, "got {:?}, expected {:?}", actual, expected);
        }
    }

    #[test]
    fn test_initial_layout_fits_image() {
        let settings = ViewSettings::default();
        let (sync, crop) = laid_out(&settings);
        assert_eq!(sync.zoom(), 1.0);
        assert_eq!(sync.pan(), PanOffset::ZERO);
        assert_rect_close(sync.corners().bounds(), Rect::new(0.0, 0.0, 500.0, 500.0));
        // The image-coordinate crop window lands on the displayed bounds
        assert_rect_close(crop, Rect::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn test_committed_small_crop_zooms_in_to_max() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );

        // Candidate 500/100 = 5 capped to max 4
        assert_eq!(sync.zoom(), 4.0);
        assert!(out.notify);
        assert!(matches!(out.action, SyncAction::Apply(_)));
        // The window scales up with the zoom and gets centered
        assert_rect_close(out.crop, Rect::new(50.0, 50.0, 450.0, 450.0));
        assert_eq!(sync.pan(), PanOffset { x: 100.0, y: 100.0 });
        // Containment: the window stays inside the rendered image bounds
        let bounds = sync.corners().bounds();
        assert!(out.crop.left >= bounds.left - EPS);
        assert!(out.crop.top >= bounds.top - EPS);
        assert!(out.crop.right <= bounds.right + EPS);
        assert!(out.crop.bottom <= bounds.bottom + EPS);
    }

    #[test]
    fn test_committed_update_is_idempotent() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        let first = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );
        let matrix = sync.matrix();
        let pan = sync.pan();

        // Feeding the adjusted window back in settles with no change
        let second =
            sync.handle_crop_window_changed(ctx(), &settings, first.crop, false, false);
        assert_eq!(second.action, SyncAction::None);
        assert!(second.notify);
        assert_eq!(second.crop, first.crop);
        assert_eq!(sync.matrix(), matrix);
        assert_eq!(sync.pan(), pan);
    }

    #[test]
    fn test_animated_zoom_captures_snapshot() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);
        let start_matrix = sync.matrix();
        let start_corners = sync.corners();

        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            true,
        );

        match out.action {
            SyncAction::Animate(snapshot) => {
                assert_eq!(snapshot.start_matrix, start_matrix);
                assert_eq!(snapshot.start_corners, start_corners);
                assert_eq!(snapshot.end_matrix, sync.matrix());
                assert_eq!(snapshot.end_corners, sync.corners());
                assert_ne!(snapshot.start_matrix, snapshot.end_matrix);
            }
            other => panic!("expected animated transition, got {:?}", other),
        }
    }

    #[test]
    fn test_committed_oversized_crop_zooms_out() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        // Zoom in first
        sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(125.0, 125.0, 375.0, 375.0),
            false,
            false,
        );
        assert_eq!(sync.zoom(), 2.0);

        // A window overflowing the viewport zooms back out
        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(-50.0, -50.0, 575.0, 575.0),
            false,
            false,
        );
        // 500 / (625 / 2) = 1.6
        assert!((sync.zoom() - 1.6).abs() < EPS);
        assert!(out.notify);
    }

    #[test]
    fn test_in_progress_inside_viewport_does_nothing() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);
        let matrix = sync.matrix();

        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            true,
            false,
        );

        assert_eq!(out.action, SyncAction::None);
        assert!(!out.notify);
        assert_eq!(sync.zoom(), 1.0);
        assert_eq!(sync.matrix(), matrix);
    }

    #[test]
    fn test_in_progress_outside_viewport_slides_image_without_zoom() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        // Zoom in so there is an off-screen region to slide to
        sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(125.0, 125.0, 375.0, 375.0),
            false,
            false,
        );
        assert_eq!(sync.zoom(), 2.0);
        let zoomed_pan = sync.pan();

        // Drag the window past the right edge mid-gesture
        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(350.0, 100.0, 600.0, 350.0),
            true,
            false,
        );

        assert_eq!(sync.zoom(), 2.0);
        assert!(!out.notify);
        assert!(matches!(out.action, SyncAction::Apply(_)));
        assert_ne!(sync.pan(), zoomed_pan);
        // The window is back inside the viewport
        assert!(out.crop.right <= 500.0 + EPS);
        assert!(out.crop.left >= -EPS);
    }

    #[test]
    fn test_auto_zoom_off_collapses_zoom_to_one() {
        let mut settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );
        assert_eq!(sync.zoom(), 4.0);

        settings.auto_zoom = false;
        let out = sync.handle_crop_window_changed(ctx(), &settings, out.crop, false, false);
        assert_eq!(sync.zoom(), 1.0);
        assert!(out.notify);
        assert!(matches!(out.action, SyncAction::Apply(_)));
        // Back to the unzoomed window position
        assert_rect_close(out.crop, Rect::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn test_empty_sizes_are_a_no_op() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);
        sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );
        let before = sync.clone();

        for empty in [
            ViewContext::new(Size::new(0.0, 0.0), Size::new(500.0, 500.0)),
            ViewContext::new(Size::new(1000.0, 1000.0), Size::new(0.0, 0.0)),
            ViewContext::default(),
        ] {
            // Degenerate crop input included on purpose
            let out = sync.handle_crop_window_changed(
                empty,
                &settings,
                Rect::new(90.0, 90.0, 10.0, 10.0),
                false,
                true,
            );
            assert_eq!(out.action, SyncAction::None);
            assert!(!out.notify);
            assert_eq!(sync, before);

            let out = sync.relayout(empty, &settings, Rect::new(0.0, 0.0, 10.0, 10.0), true);
            assert_eq!(out.action, SyncAction::None);
            assert_eq!(sync, before);
        }
    }

    #[test]
    fn test_inverted_crop_rect_is_normalized() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        // Same window as the zoom-in test, handed over inverted
        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(200.0, 200.0, 100.0, 100.0),
            false,
            false,
        );
        assert_eq!(sync.zoom(), 4.0);
        assert_rect_close(out.crop, Rect::new(50.0, 50.0, 450.0, 450.0));
        assert!(out.crop.left <= out.crop.right);
        assert!(out.crop.top <= out.crop.bottom);
    }

    #[test]
    fn test_set_crop_window_is_committed_and_animated() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);

        let out = sync.set_crop_window(ctx(), &settings, Rect::new(100.0, 100.0, 200.0, 200.0));
        assert!(out.notify);
        assert!(matches!(out.action, SyncAction::Animate(_)));
        assert_eq!(sync.zoom(), 4.0);
    }

    #[test]
    fn test_reset_discards_session_state() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);
        sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );
        assert_ne!(sync.zoom(), 1.0);

        sync.reset();
        assert_eq!(sync.zoom(), 1.0);
        assert_eq!(sync.pan(), PanOffset::ZERO);
        assert_eq!(sync.matrix(), Matrix::identity());
    }

    #[test]
    fn test_viewport_resize_relayout_keeps_window_covered() {
        let settings = ViewSettings::default();
        let (mut sync, _) = laid_out(&settings);
        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );

        // Shrink the viewport; the old window no longer fits as-is
        let resized = ViewContext::new(Size::new(1000.0, 1000.0), Size::new(400.0, 400.0));
        let out = sync.relayout(resized, &settings, out.crop, false);
        assert!(matches!(out.action, SyncAction::Apply(_)));
        let bounds = sync.corners().bounds();
        assert!(out.crop.left >= bounds.left - EPS);
        assert!(out.crop.right <= bounds.right + EPS);
    }

    #[test]
    fn test_committed_update_with_flips_centers_and_contains_window() {
        let mut settings = ViewSettings::default();
        settings.flip_horizontal = true;
        settings.flip_vertical = true;
        let (mut sync, _) = laid_out(&settings);

        let out = sync.handle_crop_window_changed(
            ctx(),
            &settings,
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
            false,
        );

        assert_eq!(sync.zoom(), 4.0);
        // Mirrored axes negate the stored pan but land the window in the
        // same centered position as the unflipped case
        assert_eq!(sync.pan(), PanOffset { x: -100.0, y: -100.0 });
        assert_rect_close(out.crop, Rect::new(50.0, 50.0, 450.0, 450.0));
        let bounds = sync.corners().bounds();
        assert!(out.crop.left >= bounds.left - EPS);
        assert!(out.crop.top >= bounds.top - EPS);
        assert!(out.crop.right <= bounds.right + EPS);
        assert!(out.crop.bottom <= bounds.bottom + EPS);

        // Feeding the adjusted window back in settles with no change
        let matrix = sync.matrix();
        let second = sync.handle_crop_window_changed(ctx(), &settings, out.crop, false, false);
        assert_eq!(second.action, SyncAction::None);
        assert_eq!(second.crop, out.crop);
        assert_eq!(sync.matrix(), matrix);
        assert_eq!(sync.pan(), PanOffset { x: -100.0, y: -100.0 });
    }

    #[test]
    fn test_committed_update_with_rotation_and_flip_contains_window() {
        let rotated = ViewContext::new(Size::new(1000.0, 500.0), Size::new(500.0, 500.0));
        let mut settings = ViewSettings::default();
        settings.rotation_degrees = 90;
        settings.flip_horizontal = true;
        let mut sync = CropWindowSync::new();
        sync.relayout(rotated, &settings, Rect::new(0.0, 0.0, 1000.0, 500.0), false);
        // Rotated bounding box fits at 0.5: 250x500 centered in the viewport
        assert_rect_close(sync.corners().bounds(), Rect::new(125.0, 0.0, 375.0, 500.0));

        let out = sync.handle_crop_window_changed(
            rotated,
            &settings,
            Rect::new(125.0, 125.0, 375.0, 375.0),
            false,
            false,
        );

        // 500 / (250 / 1) = 2, limited by the narrow axis
        assert_eq!(sync.zoom(), 2.0);
        assert_rect_close(out.crop, Rect::new(0.0, 0.0, 500.0, 500.0));
        let bounds = sync.corners().bounds();
        assert!(out.crop.left >= bounds.left - EPS);
        assert!(out.crop.top >= bounds.top - EPS);
        assert!(out.crop.right <= bounds.right + EPS);
        assert!(out.crop.bottom <= bounds.bottom + EPS);

        // A repeat pass stays settled up to trig rounding
        let second = sync.handle_crop_window_changed(rotated, &settings, out.crop, false, false);
        assert!((sync.zoom() - 2.0).abs() < EPS);
        assert_rect_close(second.crop, out.crop);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: committed updates keep zoom in [1, max] and the
            /// adjusted window inside the rendered image bounds.
            #[test]
            fn prop_committed_update_bounds_and_containment(
                (left, top) in (0.0f32..400.0, 0.0f32..400.0),
                (w, h) in (10.0f32..480.0, 10.0f32..480.0),
                max_zoom in 1.0f32..8.0,
                rotation in proptest::sample::select(vec![0, 90, 180, 270]),
                (flip_h, flip_v) in (proptest::bool::ANY, proptest::bool::ANY),
            ) {
                let mut settings = ViewSettings::default();
                settings.max_zoom = max_zoom;
                settings.rotation_degrees = rotation;
                settings.flip_horizontal = flip_h;
                settings.flip_vertical = flip_v;
                let (mut sync, _) = laid_out(&settings);

                let crop = Rect::new(
                    left,
                    top,
                    (left + w).min(500.0),
                    (top + h).min(500.0),
                );
                let out = sync.handle_crop_window_changed(ctx(), &settings, crop, false, false);

                prop_assert!(sync.zoom() >= 1.0);
                prop_assert!(sync.zoom() <= max_zoom);
                for v in sync.matrix().elements() {
                    prop_assert!(v.is_finite());
                }

                let bounds = sync.corners().bounds();
                prop_assert!(out.crop.left >= bounds.left - 0.01);
                prop_assert!(out.crop.top >= bounds.top - 0.01);
                prop_assert!(out.crop.right <= bounds.right + 0.01);
                prop_assert!(out.crop.bottom <= bounds.bottom + 0.01);
            }

            /// Property: an empty viewport never mutates state, whatever
            /// the crop input.
            #[test]
            fn prop_empty_viewport_never_mutates(
                (l, t, r, b) in (
                    -1000.0f32..1000.0,
                    -1000.0f32..1000.0,
                    -1000.0f32..1000.0,
                    -1000.0f32..1000.0,
                ),
                in_progress in proptest::bool::ANY,
            ) {
                let settings = ViewSettings::default();
                let mut sync = CropWindowSync::new();
                let empty = ViewContext::new(Size::new(1000.0, 1000.0), Size::new(0.0, 0.0));

                let out = sync.handle_crop_window_changed(
                    empty,
                    &settings,
                    Rect::new(l, t, r, b),
                    in_progress,
                    true,
                );
                prop_assert_eq!(out.action, SyncAction::None);
                prop_assert!(!out.notify);
                prop_assert_eq!(sync, CropWindowSync::new());
            }
        }
    }
}
