//! The transform build pipeline.

use crate::geom::{Corners, Size};
use crate::matrix::{Matrix, TransformError};
use crate::pan::PanOffset;
use crate::{ScaleMode, ViewSettings};

/// Side length of the unit square mapped through the matrix to probe the
/// displayed-to-native scale factor.
const SCALE_PROBE: f32 = 100.0;

/// A fully built placement: the matrix and the image corners it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The composed affine matrix to apply to the image.
    pub matrix: Matrix,
    /// The image's four corners mapped through [`Placement::matrix`].
    pub corners: Corners,
}

impl Placement {
    /// Displayed pixels per native image pixel on each axis.
    ///
    /// Computed by mapping a fixed probe square through the matrix, so it
    /// reflects rotation, fit-scale, and zoom together. The crop overlay
    /// uses this to convert its minimum/maximum window limits from native
    /// image units into viewport units.
    pub fn display_scale(&self) -> (f32, f32) {
        let probe = self.matrix.map_corners(&Corners([
            0.0,
            0.0,
            SCALE_PROBE,
            0.0,
            SCALE_PROBE,
            SCALE_PROBE,
            0.0,
            SCALE_PROBE,
        ]));
        (probe.width() / SCALE_PROBE, probe.height() / SCALE_PROBE)
    }
}

/// Build the matrix placing `image` inside `viewport`.
///
/// Applies the five ordered stages described in the [module docs](super)
/// and recomputes the image corners from the native rectangle after every
/// stage, so each stage pivots on the geometry the previous stage actually
/// produced.
///
/// The fit-scale stage runs only when the scale mode asks for it:
/// [`ScaleMode::FitCenter`] always fits, [`ScaleMode::CenterInside`] only
/// shrinks (fit factor below 1), and any mode fits when the image is
/// smaller than the viewport while auto-zoom is on (so zooming starts from
/// a fitted image rather than a tiny centered one).
///
/// # Arguments
///
/// * `image` - Native image size in pixels
/// * `viewport` - Viewport size in pixels
/// * `settings` - Rotation, flips, scale mode, auto-zoom
/// * `zoom` - Current zoom level (>= 1)
/// * `pan` - Persisted pan offset in pre-zoom-scale units
///
/// # Errors
///
/// [`TransformError::EmptyInput`] when either size has a zero or negative
/// dimension; callers treat this as "keep the previous state".
pub fn place_image(
    image: Size,
    viewport: Size,
    settings: &ViewSettings,
    zoom: f32,
    pan: PanOffset,
) -> Result<Placement, TransformError> {
    if image.is_empty() || viewport.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    let native = Corners::of(image);
    let mut matrix = Matrix::identity();

    // Move the image to the center of the viewport first so every later
    // stage can pivot from there
    matrix.post_translate(
        (viewport.width - image.width) / 2.0,
        (viewport.height - image.height) / 2.0,
    );
    let mut corners = matrix.map_corners(&native);

    // Rotate the required degrees about the center of the placed corners
    let degrees = settings.normalized_rotation();
    if degrees > 0 {
        matrix.post_rotate(degrees as f32, corners.center_x(), corners.center_y());
        corners = matrix.map_corners(&native);
    }

    // Fit the rotated bounding box to the viewport on the limiting axis
    let fit = (viewport.width / corners.width()).min(viewport.height / corners.height());
    if settings.scale_mode == ScaleMode::FitCenter
        || (settings.scale_mode == ScaleMode::CenterInside && fit < 1.0)
        || (fit > 1.0 && settings.auto_zoom)
    {
        matrix.post_scale(fit, fit, corners.center_x(), corners.center_y());
        corners = matrix.map_corners(&native);
    }

    // Zoom, mirroring for flips via negative factors
    let (scale_x, scale_y) = settings.axis_scales(zoom);
    matrix.post_scale(scale_x, scale_y, corners.center_x(), corners.center_y());
    corners = matrix.map_corners(&native);

    // Pan is stored in pre-scale units so it stays stable as zoom changes
    matrix.post_translate(pan.x * scale_x, pan.y * scale_y);
    corners = matrix.map_corners(&native);

    Ok(Placement { matrix, corners })
}
