use crate::layout::LabeledPoint;
use crate::vector::{normalize, rotate};
use glam::{DVec2, DVec3};

/// Axis perpendicular to the drag direction, lying in the screen plane, so the
/// sphere rolls along with the pointer.
#[inline]
pub fn compute_axis(dx: f64, dy: f64) -> DVec3 {
    normalize(DVec3::new(-dy, dx, 0.0))
}

/// Rotation angle in radians for a drag of `(dx, dy)` screen units.
#[inline]
pub fn compute_angle(dx: f64, dy: f64, sensitivity: f64) -> f64 {
    DVec2::new(dx, dy).length() * sensitivity
}

/// Rotation derived from a single drag-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
    pub axis: DVec3,
    pub angle: f64,
}

impl DragRotation {
    /// `None` for a zero-length drag, which carries no direction.
    pub fn from_drag(dx: f64, dy: f64, sensitivity: f64) -> Option<Self> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(Self {
            axis: compute_axis(dx, dy),
            angle: compute_angle(dx, dy, sensitivity),
        })
    }

    #[inline]
    pub fn apply(&self, position: DVec3) -> DVec3 {
        rotate(position, self.axis, self.angle)
    }

    /// Rotated copy of `points`; labels and ordering are kept.
    pub fn apply_all(&self, points: &[LabeledPoint]) -> Vec<LabeledPoint> {
        points
            .iter()
            .map(|p| p.moved_to(self.apply(p.position)))
            .collect()
    }
}

/// One drag step over a full point set. A zero drag hands back an identical
/// copy of the input.
pub fn step(points: &[LabeledPoint], dx: f64, dy: f64, sensitivity: f64) -> Vec<LabeledPoint> {
    match DragRotation::from_drag(dx, dy, sensitivity) {
        Some(rotation) => rotation.apply_all(points),
        None => points.to_vec(),
    }
}
