use crate::constants::{
    DEFAULT_RADIUS, DEFAULT_TOUCH_RADIUS, DRAG_SENSITIVITY, MAX_OPACITY, MIN_OPACITY,
    PERSPECTIVE_DEPTH,
};
use crate::error::ConfigError;
use crate::projector::DepthCue;

/// Tunables for a [`TagSphere`](crate::controller::TagSphere).
///
/// `radius` is not validated: a non-positive radius is accepted and collapses
/// the layout onto the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub radius: f64,
    pub sensitivity: f64,
    pub perspective_depth: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub touch_radius: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sensitivity: DRAG_SENSITIVITY,
            perspective_depth: PERSPECTIVE_DEPTH,
            min_opacity: MIN_OPACITY,
            max_opacity: MAX_OPACITY,
            touch_radius: DEFAULT_TOUCH_RADIUS,
        }
    }
}

impl SphereConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_touch_radius(mut self, touch_radius: f64) -> Self {
        self.touch_radius = touch_radius;
        self
    }

    /// Converts lengths given in CSS pixels to a surface with `pixel_ratio`
    /// device pixels per CSS pixel.
    ///
    /// Radius, perspective depth and touch radius grow by the ratio while the
    /// sensitivity shrinks by it, so a drag of the same CSS length turns the
    /// sphere by the same angle on every screen.
    pub fn scaled_to_pixel_ratio(self, pixel_ratio: f64) -> Self {
        Self {
            radius: self.radius * pixel_ratio,
            sensitivity: self.sensitivity / pixel_ratio,
            perspective_depth: self.perspective_depth * pixel_ratio,
            touch_radius: self.touch_radius * pixel_ratio,
            ..self
        }
    }

    /// Raises `perspective_depth` to at least `factor * radius`.
    ///
    /// Depth scale reaches zero at `z = -perspective_depth`; with any
    /// `factor > 1` every label on the sphere keeps a positive scale.
    pub fn with_perspective_headroom(mut self, factor: f64) -> Self {
        let floor = self.radius * factor;
        if floor.is_finite() && floor > self.perspective_depth {
            self.perspective_depth = floor;
        }
        self
    }

    pub fn depth_cue(&self) -> DepthCue {
        DepthCue {
            perspective_depth: self.perspective_depth,
            min_opacity: self.min_opacity,
            max_opacity: self.max_opacity,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sensitivity", self.sensitivity)?;
        positive("perspective_depth", self.perspective_depth)?;
        positive("touch_radius", self.touch_radius)?;
        finite("min_opacity", self.min_opacity)?;
        finite("max_opacity", self.max_opacity)?;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.min_opacity)
            || !in_unit(self.max_opacity)
            || self.min_opacity > self.max_opacity
        {
            return Err(ConfigError::OpacityRange {
                min: self.min_opacity,
                max: self.max_opacity,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
