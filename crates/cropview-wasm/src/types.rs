//! WASM-compatible wrapper types for synchronization results.
//!
//! This module mirrors the core outcome types as plain serde structures so
//! they cross the JavaScript boundary through `serde-wasm-bindgen` as
//! ordinary objects, instead of handing out wasm-owned handles the host
//! would have to free.

use cropview_core::{Rect, SyncAction, SyncOutcome, TransformSnapshot};
use serde::Serialize;

/// Matrix elements as `[a, b, c, d, e, f]`, the argument order of
/// `CanvasRenderingContext2D.setTransform(a, d, b, e, c, f)` rearranged
/// row-major.
pub type MatrixElements = [f32; 6];

/// Serialized form of a [`TransformSnapshot`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsTransformSnapshot {
    pub start_matrix: MatrixElements,
    pub start_corners: [f32; 8],
    pub end_matrix: MatrixElements,
    pub end_corners: [f32; 8],
}

impl From<TransformSnapshot> for JsTransformSnapshot {
    fn from(snapshot: TransformSnapshot) -> Self {
        JsTransformSnapshot {
            start_matrix: snapshot.start_matrix.elements(),
            start_corners: snapshot.start_corners.0,
            end_matrix: snapshot.end_matrix.elements(),
            end_corners: snapshot.end_corners.0,
        }
    }
}

/// Serialized form of a [`SyncAction`], tagged by `kind`.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JsSyncAction {
    /// Keep the current matrix.
    None,
    /// Apply `matrix` immediately.
    Apply { matrix: MatrixElements },
    /// Animate from the start state to the end state.
    Animate { snapshot: JsTransformSnapshot },
}

impl From<SyncAction> for JsSyncAction {
    fn from(action: SyncAction) -> Self {
        match action {
            SyncAction::None => JsSyncAction::None,
            SyncAction::Apply(matrix) => JsSyncAction::Apply {
                matrix: matrix.elements(),
            },
            SyncAction::Animate(snapshot) => JsSyncAction::Animate {
                snapshot: snapshot.into(),
            },
        }
    }
}

/// Serialized form of a [`SyncOutcome`].
///
/// `crop` is the rectangle the host must write back into its crop overlay;
/// `notify` tells it whether to fire its crop-window-changed callback.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsSyncOutcome {
    pub crop: Rect,
    pub action: JsSyncAction,
    pub notify: bool,
}

impl From<SyncOutcome> for JsSyncOutcome {
    fn from(outcome: SyncOutcome) -> Self {
        JsSyncOutcome {
            crop: outcome.crop,
            action: outcome.action.into(),
            notify: outcome.notify,
        }
    }
}
