/// Input events the field understands, in viewport (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The mouse cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The mouse cursor left the drawing surface.
    PointerLeave,
    /// A single-finger touch moved to (x, y).
    TouchMove { x: f32, y: f32 },
    /// The active touch ended.
    TouchEnd,
    /// The viewport changed size. Debounced before the field is rebuilt.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue between frames; Rust drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
