//! Depth cues and paint order for the current sphere orientation.
//!
//! Projection is orthographic: a label's screen position is the centre plus
//! its `(x, y)`, while `z` (positive towards the viewer) only drives scale and
//! opacity. Instructions come out back to front so a painter can draw them in
//! order and have nearer labels cover farther ones.

use crate::constants::{MAX_OPACITY, MIN_OPACITY, PERSPECTIVE_DEPTH};
use crate::layout::LabeledPoint;
use glam::{DVec2, DVec3};
use std::sync::Arc;

/// Depth-to-appearance mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthCue {
    pub perspective_depth: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
}

impl Default for DepthCue {
    fn default() -> Self {
        Self {
            perspective_depth: PERSPECTIVE_DEPTH,
            min_opacity: MIN_OPACITY,
            max_opacity: MAX_OPACITY,
        }
    }
}

impl DepthCue {
    #[inline]
    pub fn scale(&self, z: f64) -> f64 {
        z / self.perspective_depth + 1.0
    }

    #[inline]
    pub fn opacity(&self, z: f64) -> f64 {
        let span = 2.0 * self.perspective_depth;
        // an inverted range resolves to max_opacity
        ((z + self.perspective_depth) / span)
            .max(self.min_opacity)
            .min(self.max_opacity)
    }
}

/// Everything a drawing surface needs to paint one label.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawInstruction {
    pub position: DVec2,
    pub depth: f64,
    pub scale: f64,
    pub opacity: f64,
    pub text: Arc<str>,
}

impl DrawInstruction {
    /// Font size for a caller-supplied base text size.
    #[inline]
    pub fn font_size(&self, base: f64) -> f64 {
        base * self.scale
    }
}

/// Screen position of a sphere point around `center`.
#[inline]
pub fn screen_position(position: DVec3, center: DVec2) -> DVec2 {
    center + position.truncate()
}

/// Draw list for `points`, farthest first.
pub fn project(points: &[LabeledPoint], center: DVec2, cue: &DepthCue) -> Vec<DrawInstruction> {
    let mut out: Vec<DrawInstruction> = points
        .iter()
        .map(|p| {
            let z = p.position.z;
            DrawInstruction {
                position: screen_position(p.position, center),
                depth: z,
                scale: cue.scale(z),
                opacity: cue.opacity(z),
                text: Arc::clone(&p.text),
            }
        })
        .collect();
    // stable: equal depths keep input order
    out.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    out
}
