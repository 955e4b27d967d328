//! Interaction controller: owns the live sphere and reacts to classified input.
//!
//! Deciding whether a pointer gesture is a drag or a tap is left to the host;
//! the controller only sees the resulting [`SphereInput`] events and applies
//! them strictly in delivery order.

use crate::config::SphereConfig;
use crate::error::ConfigError;
use crate::projector::{DepthCue, DrawInstruction};
use crate::state::SphereState;
use glam::DVec2;
use std::sync::Arc;

/// Discrete input produced by the host's gesture classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SphereInput {
    /// Incremental pointer movement since the previous drag event.
    DragMove { dx: f64, dy: f64 },
    /// Pointer released without exceeding the host's touch slop.
    Tap { x: f64, y: f64 },
}

type SelectCallback = Box<dyn FnMut(&str)>;

pub struct TagSphere {
    config: SphereConfig,
    cue: DepthCue,
    labels: Vec<String>,
    baseline: SphereState,
    live: SphereState,
    revision: u64,
    on_select: Option<SelectCallback>,
}

impl TagSphere {
    pub fn new<S: AsRef<str>>(labels: &[S], config: SphereConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let labels: Vec<String> = labels.iter().map(|s| s.as_ref().to_owned()).collect();
        let baseline = SphereState::layout(&labels, config.radius);
        log::info!(
            "[sphere] laid out {} labels at radius {:.1}",
            baseline.len(),
            baseline.radius()
        );
        Ok(Self {
            cue: config.depth_cue(),
            config,
            labels,
            live: baseline.clone(),
            baseline,
            revision: 0,
            on_select: None,
        })
    }

    /// Register the callback invoked with the label text whenever a tap hits.
    pub fn on_select(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SphereState {
        self.live.clone()
    }

    /// Unrotated layout the live sphere started from.
    pub fn baseline(&self) -> &SphereState {
        &self.baseline
    }

    /// Bumped every time a new snapshot is published.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one input event. Returns the selected label for a tap that hit.
    pub fn handle(&mut self, input: SphereInput, center: DVec2) -> Option<Arc<str>> {
        match input {
            SphereInput::DragMove { dx, dy } => {
                self.on_drag(dx, dy);
                None
            }
            SphereInput::Tap { x, y } => self.on_tap(DVec2::new(x, y), center),
        }
    }

    pub fn on_drag(&mut self, dx: f64, dy: f64) {
        if self.live.is_empty() {
            return;
        }
        let next = self.live.on_drag_with(dx, dy, self.config.sensitivity);
        if next.same_snapshot(&self.live) {
            return;
        }
        log::debug!(
            "[drag] dx={dx:.1} dy={dy:.1} drift={:.2e}",
            next.max_radius_drift()
        );
        self.publish(next);
    }

    pub fn on_tap(&mut self, tap: DVec2, center: DVec2) -> Option<Arc<str>> {
        let hit = self
            .live
            .on_tap_with(tap, center, self.config.touch_radius)
            .map(|p| Arc::clone(&p.text));
        match &hit {
            Some(text) => {
                log::info!("[tap] selected {text:?}");
                if let Some(cb) = self.on_select.as_mut() {
                    cb(text);
                }
            }
            None => log::debug!("[tap] miss at ({:.1},{:.1})", tap.x, tap.y),
        }
        hit
    }

    /// Back-to-front draw list for the current orientation.
    pub fn frame(&self, center: DVec2) -> Vec<DrawInstruction> {
        self.live.project_with(center, &self.cue)
    }

    /// Replace the label set; the sphere is laid out afresh.
    pub fn set_labels<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.labels = labels.iter().map(|s| s.as_ref().to_owned()).collect();
        self.relayout();
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.config.radius = radius;
        self.relayout();
    }

    /// Drop all accumulated rotation and show the original layout again.
    pub fn reset_orientation(&mut self) {
        self.publish(self.baseline.clone());
    }

    fn relayout(&mut self) {
        self.baseline = SphereState::layout(&self.labels, self.config.radius);
        log::info!(
            "[sphere] relayout {} labels at radius {:.1}",
            self.baseline.len(),
            self.baseline.radius()
        );
        self.publish(self.baseline.clone());
    }

    fn publish(&mut self, next: SphereState) {
        self.live = next;
        self.revision = self.revision.wrapping_add(1);
    }
}
