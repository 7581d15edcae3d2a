//! WASM bindings for the crop viewport synchronizer.
//!
//! [`CropView`] is the one stateful object the JavaScript host keeps per
//! displayed image. The host owns the widget: it decodes the bitmap, lays
//! out the viewport, draws the crop overlay, and interprets gestures. This
//! class owns the math: it turns every crop-window event into a matrix to
//! apply (or animate to) and the adjusted rectangle to draw.

use crate::types::JsSyncOutcome;
use cropview_core::{
    CropWindowSync, Placement, Rect, Size, SyncAction, SyncOutcome, ViewContext, ViewSettings,
};
use wasm_bindgen::prelude::*;

/// Crop viewport transform state for one loaded image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const view = new CropView();
/// view.set_viewport_size(canvas.width, canvas.height);
/// view.set_image_size(bitmap.width, bitmap.height);
///
/// const outcome = view.crop_window_changed(l, t, r, b, false, true);
/// overlay.setWindow(outcome.crop);
/// if (outcome.action.kind === "apply") {
///   ctx.setTransform(...toCanvas(outcome.action.matrix));
/// }
/// ```
#[wasm_bindgen]
pub struct CropView {
    sync: CropWindowSync,
    settings: ViewSettings,
    image: Size,
    viewport: Size,
}

impl Default for CropView {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CropView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CropView {
        CropView {
            sync: CropWindowSync::new(),
            settings: ViewSettings::default(),
            image: Size::default(),
            viewport: Size::default(),
        }
    }

    /// Set the native size of the loaded image.
    ///
    /// A new image starts a new session: zoom and pan are discarded.
    pub fn set_image_size(&mut self, width: f32, height: f32) {
        self.image = Size::new(width, height);
        self.sync.reset();
    }

    /// Set the viewport size. Call again from the host's resize handler,
    /// then run [`CropView::relayout`].
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }

    /// Replace the display settings with a plain settings object
    /// (`rotation_degrees`, `flip_horizontal`, `flip_vertical`,
    /// `scale_mode`, `auto_zoom`, `max_zoom`).
    ///
    /// A malformed object is reported on the browser console and rejected;
    /// the previous settings stay in effect.
    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsValue> {
        match serde_wasm_bindgen::from_value(settings) {
            Ok(parsed) => {
                self.settings = parsed;
                Ok(())
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("cropview: invalid settings object: {}", err).into(),
                );
                Err(err.into())
            }
        }
    }

    /// The current settings as a plain object.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.settings)?)
    }

    /// Toggle auto-zoom and immediately re-synchronize.
    ///
    /// Disabling the mode actively animates the view back to zoom 1 rather
    /// than freezing the current level, so the outcome must be applied like
    /// any other committed update.
    pub fn set_auto_zoom(
        &mut self,
        enabled: bool,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<JsValue, JsValue> {
        let outcome = self.toggle_auto_zoom(enabled, Rect::new(left, top, right, bottom));
        to_js(outcome)
    }

    /// Handle a crop-window change from the host's gesture handling.
    ///
    /// * `in_progress` - the user is still dragging a handle
    /// * `animate` - animate a zoom change instead of applying it directly
    pub fn crop_window_changed(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        in_progress: bool,
        animate: bool,
    ) -> Result<JsValue, JsValue> {
        let outcome = self.handle(Rect::new(left, top, right, bottom), in_progress, animate);
        to_js(outcome)
    }

    /// Assign the crop window programmatically (committed and animated).
    pub fn set_crop_window(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<JsValue, JsValue> {
        let crop = Rect::new(left, top, right, bottom);
        let outcome = self.sync.set_crop_window(self.ctx(), &self.settings, crop);
        to_js(outcome)
    }

    /// Re-apply the transform after a viewport resize or setting change.
    ///
    /// With `center` false the existing pan is only clamped so the crop
    /// window stays inside the rendered image.
    pub fn relayout(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        center: bool,
    ) -> Result<JsValue, JsValue> {
        let outcome = self.layout(Rect::new(left, top, right, bottom), center);
        to_js(outcome)
    }

    /// Current zoom level.
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 {
        self.sync.zoom()
    }

    /// The last committed matrix as `[a, b, c, d, e, f]`.
    pub fn matrix(&self) -> Vec<f32> {
        self.sync.matrix().elements().to_vec()
    }

    /// The image's four corners under the last committed matrix, as
    /// `[x0, y0, ..., x3, y3]` in top-left, top-right, bottom-right,
    /// bottom-left order.
    pub fn corners(&self) -> Vec<f32> {
        self.sync.corners().0.to_vec()
    }

    /// Displayed pixels per native image pixel as `[sx, sy]`.
    ///
    /// The crop overlay uses this to convert its minimum window size from
    /// image units into viewport units.
    pub fn display_scale(&self) -> Vec<f32> {
        let placement = Placement {
            matrix: self.sync.matrix(),
            corners: self.sync.corners(),
        };
        let (sx, sy) = placement.display_scale();
        vec![sx, sy]
    }

    /// Discard zoom, pan, and matrix state.
    pub fn reset(&mut self) {
        self.sync.reset();
    }
}

// Native logic kept off the JS boundary so it stays unit-testable without
// a wasm runtime.
impl CropView {
    fn ctx(&self) -> ViewContext {
        ViewContext::new(self.image, self.viewport)
    }

    fn handle(&mut self, crop: Rect, in_progress: bool, animate: bool) -> SyncOutcome {
        self.sync
            .handle_crop_window_changed(self.ctx(), &self.settings, crop, in_progress, animate)
    }

    fn layout(&mut self, crop: Rect, center: bool) -> SyncOutcome {
        self.sync.relayout(self.ctx(), &self.settings, crop, center)
    }

    fn toggle_auto_zoom(&mut self, enabled: bool, crop: Rect) -> SyncOutcome {
        if self.settings.auto_zoom == enabled {
            return SyncOutcome {
                crop,
                action: SyncAction::None,
                notify: false,
            };
        }
        self.settings.auto_zoom = enabled;
        self.handle(crop, false, true)
    }
}

fn to_js(outcome: SyncOutcome) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&JsSyncOutcome::from(outcome))?)
}
