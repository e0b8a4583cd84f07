use glam::Vec2;

use super::queue::InputEvent;

/// The most recent mouse or touch location, if any, plus the radius
/// inside which it repels particles.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Option<Vec2>,
    radius: f32,
}

impl PointerTracker {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    /// Overwrite the tracked point. No smoothing.
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Route a pointer or touch event. Returns false for events this tracker does not own.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.set(x, y);
                true
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.clear();
                true
            }
            InputEvent::Resize { .. } => false,
        }
    }
}
