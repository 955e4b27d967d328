//! Immutable sphere snapshots.
//!
//! A [`SphereState`] is never modified after it is built: every drag produces a
//! fresh snapshot and the owner swaps its reference. Anyone still holding the
//! previous snapshot (a redraw in progress, for instance) keeps a complete,
//! consistent set of positions.

use crate::constants::{DEFAULT_TOUCH_RADIUS, DRAG_SENSITIVITY};
use crate::hit_test::hit_test;
use crate::layout::{effective_radius, place, LabeledPoint};
use crate::projector::{project, DepthCue, DrawInstruction};
use crate::rotation::DragRotation;
use glam::DVec2;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct SphereState {
    radius: f64,
    points: Arc<[LabeledPoint]>,
}

impl SphereState {
    /// Fresh, unrotated sphere for `labels`.
    pub fn layout<S: AsRef<str>>(labels: &[S], radius: f64) -> Self {
        let radius = effective_radius(radius);
        Self {
            radius,
            points: place(labels, radius).into(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when both snapshots share the same point storage.
    pub fn same_snapshot(&self, other: &SphereState) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }

    pub fn on_drag(&self, dx: f64, dy: f64) -> SphereState {
        self.on_drag_with(dx, dy, DRAG_SENSITIVITY)
    }

    /// Snapshot rotated by one drag step. A zero drag returns this snapshot.
    pub fn on_drag_with(&self, dx: f64, dy: f64, sensitivity: f64) -> SphereState {
        match DragRotation::from_drag(dx, dy, sensitivity) {
            Some(rotation) => self.rotated(&rotation),
            None => self.clone(),
        }
    }

    pub fn rotated(&self, rotation: &DragRotation) -> SphereState {
        SphereState {
            radius: self.radius,
            points: rotation.apply_all(&self.points).into(),
        }
    }

    pub fn on_tap(&self, tap_x: f64, tap_y: f64, center_x: f64, center_y: f64) -> Option<&str> {
        self.on_tap_with(
            DVec2::new(tap_x, tap_y),
            DVec2::new(center_x, center_y),
            DEFAULT_TOUCH_RADIUS,
        )
        .map(|p| p.text.as_ref())
    }

    pub fn on_tap_with(
        &self,
        tap: DVec2,
        center: DVec2,
        touch_radius: f64,
    ) -> Option<&LabeledPoint> {
        hit_test(&self.points, tap, center, touch_radius)
    }

    pub fn project(&self, center_x: f64, center_y: f64) -> Vec<DrawInstruction> {
        self.project_with(DVec2::new(center_x, center_y), &DepthCue::default())
    }

    pub fn project_with(&self, center: DVec2, cue: &DepthCue) -> Vec<DrawInstruction> {
        project(&self.points, center, cue)
    }

    /// Largest deviation of any point's distance from the centre against the
    /// layout radius.
    pub fn max_radius_drift(&self) -> f64 {
        self.points
            .iter()
            .map(|p| (p.position.length() - self.radius).abs())
            .fold(0.0, f64::max)
    }
}
