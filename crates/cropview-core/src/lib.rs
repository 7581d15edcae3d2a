//! Cropview Core - Crop viewport geometry library
//!
//! This crate computes and maintains the affine transform that places a
//! source image inside a viewport under rotation, flipping, an interactive
//! crop window, and an auto-zoom mode that keeps the crop window at a
//! target fraction of the visible image area.
//!
//! The host widget (view lifecycle, touch handling, bitmap decoding) lives
//! outside this crate; it supplies sizes, settings, and the crop rectangle,
//! and receives the composed matrix plus the adjusted rectangle back.

pub mod geom;
pub mod matrix;
pub mod pan;
pub mod sync;
pub mod transform;
pub mod zoom;

pub use geom::{Corners, Rect, Size};
pub use matrix::{Matrix, TransformError};
pub use pan::PanOffset;
pub use sync::{CropWindowSync, SyncAction, SyncOutcome, TransformSnapshot, ViewContext};
pub use transform::{place_image, Placement};
pub use zoom::{solve_zoom, ZoomState};

/// How the image is scaled into the viewport before zoom is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ScaleMode {
    /// Always scale so the image's bounding box exactly fits the viewport.
    #[default]
    FitCenter,
    /// Scale down to fit, but never scale up past the image's native size.
    CenterInside,
    /// Center without fit-scaling; scaling only happens through auto-zoom.
    Center,
}

/// Display settings owned by the host widget, read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewSettings {
    /// Rotation in degrees; any integer is accepted and normalized into
    /// 0..360 before use.
    pub rotation_degrees: i32,
    /// Mirror the image horizontally.
    pub flip_horizontal: bool,
    /// Mirror the image vertically.
    pub flip_vertical: bool,
    /// Fit-scaling policy.
    pub scale_mode: ScaleMode,
    /// Automatically zoom so the crop window covers a target fraction of
    /// the visible area. Disabling this actively zooms back out to 1.
    pub auto_zoom: bool,
    /// Upper zoom bound; the lower bound is fixed at 1 (image fit to
    /// viewport).
    pub max_zoom: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            rotation_degrees: 0,
            flip_horizontal: false,
            flip_vertical: false,
            scale_mode: ScaleMode::FitCenter,
            auto_zoom: true,
            max_zoom: 4.0,
        }
    }
}

impl ViewSettings {
    /// Rotation normalized into `0..360`.
    pub fn normalized_rotation(&self) -> i32 {
        self.rotation_degrees.rem_euclid(360)
    }

    /// Per-axis scale factors for a given zoom level, with flips folded in
    /// as negative signs.
    pub fn axis_scales(&self, zoom: f32) -> (f32, f32) {
        let sx = if self.flip_horizontal { -zoom } else { zoom };
        let sy = if self.flip_vertical { -zoom } else { zoom };
        (sx, sy)
    }
}
