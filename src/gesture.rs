// Drag/tap classification for a single pointer.
//
// The sphere core only understands discrete drag-move and tap events; this
// tracker turns raw pointer down/move/up into those. A press stays a tap
// candidate until it travels `slop` away from where it started, after which
// every move is forwarded as an incremental drag. The first drag event
// carries the whole displacement since the press so no movement is lost.

use glam::DVec2;
use sphere_core::SphereInput;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressed { pointer_id: i32, origin: DVec2 },
    Dragging { pointer_id: i32, last: DVec2 },
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    slop: f64,
    phase: Phase,
}

impl GestureTracker {
    pub fn new(slop: f64) -> Self {
        Self {
            slop,
            phase: Phase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Starts tracking a press. Presses from a second pointer while one is
    /// already tracked are ignored.
    pub fn pointer_down(&mut self, pointer_id: i32, pos: DVec2) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Pressed {
                pointer_id,
                origin: pos,
            };
        }
    }

    pub fn pointer_move(&mut self, pointer_id: i32, pos: DVec2) -> Option<SphereInput> {
        match self.phase {
            Phase::Pressed { pointer_id: id, origin } if id == pointer_id => {
                if pos.distance(origin) < self.slop {
                    return None;
                }
                self.phase = Phase::Dragging {
                    pointer_id,
                    last: pos,
                };
                Some(drag(pos - origin))
            }
            Phase::Dragging { pointer_id: id, last } if id == pointer_id => {
                self.phase = Phase::Dragging {
                    pointer_id,
                    last: pos,
                };
                let delta = pos - last;
                (delta != DVec2::ZERO).then(|| drag(delta))
            }
            _ => None,
        }
    }

    pub fn pointer_up(&mut self, pointer_id: i32, pos: DVec2) -> Option<SphereInput> {
        match self.phase {
            Phase::Pressed { pointer_id: id, .. } if id == pointer_id => {
                self.phase = Phase::Idle;
                Some(SphereInput::Tap { x: pos.x, y: pos.y })
            }
            Phase::Dragging { pointer_id: id, .. } if id == pointer_id => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        match self.phase {
            Phase::Pressed { pointer_id: id, .. } | Phase::Dragging { pointer_id: id, .. }
                if id == pointer_id =>
            {
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }
}

#[inline]
fn drag(delta: DVec2) -> SphereInput {
    SphereInput::DragMove {
        dx: delta.x,
        dy: delta.y,
    }
}
