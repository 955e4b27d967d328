//! Even spiral placement of labels on a sphere surface.
//!
//! Label `i` of `n` lands on polar angle `acos(-1 + 2i/n)` and azimuth
//! `sqrt(n·π)·phi`, which winds a spiral from the `-z` pole towards `+z` with
//! roughly uniform coverage. Placement only depends on the index, the label
//! count and the radius, so the same input always yields the same sphere.

use glam::DVec3;
use std::f64::consts::PI;
use std::sync::Arc;

/// One tag on the sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    pub position: DVec3,
    pub text: Arc<str>,
}

impl LabeledPoint {
    pub fn new(position: DVec3, text: impl Into<Arc<str>>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Same label at a new position.
    #[inline]
    pub fn moved_to(&self, position: DVec3) -> Self {
        Self {
            position,
            text: Arc::clone(&self.text),
        }
    }
}

/// Position of label `index` out of `count` on a sphere of `radius`.
#[inline]
pub fn spiral_position(index: usize, count: usize, radius: f64) -> DVec3 {
    let n = count as f64;
    let phi = (-1.0 + (2.0 * index as f64) / n).acos();
    let theta = (n * PI).sqrt() * phi;
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(
        radius * cos_theta * sin_phi,
        radius * sin_theta * sin_phi,
        radius * cos_phi,
    )
}

/// Lay `labels` out on a sphere of `radius`, preserving their order.
///
/// A non-positive (or non-finite) radius collapses every label onto the
/// origin.
pub fn layout<S: AsRef<str>>(labels: &[S], radius: f64) -> Vec<LabeledPoint> {
    place(labels, effective_radius(radius))
}

/// Spiral placement for an already checked radius.
pub(crate) fn place<S: AsRef<str>>(labels: &[S], radius: f64) -> Vec<LabeledPoint> {
    let count = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| LabeledPoint::new(spiral_position(i, count, radius), label.as_ref()))
        .collect()
}

pub(crate) fn effective_radius(radius: f64) -> f64 {
    if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        log::warn!("[layout] degenerate radius {radius}; labels collapse to the origin");
        0.0
    }
}
