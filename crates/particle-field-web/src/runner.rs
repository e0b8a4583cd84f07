use particle_field::{
    CancelToken, FieldConfig, InputEvent, InputQueue, LoopState, RenderLoop, ResizeDebouncer,
    Simulator, Surface, ThemeSignal,
};

/// Host-agnostic glue between browser events and the render loop.
///
/// The wasm exports keep one runner in a `thread_local!`; JS (or the
/// self-driven requestAnimationFrame loop) pushes input and calls `tick`.
pub struct FieldRunner {
    render_loop: RenderLoop,
    input: InputQueue,
    resize: ResizeDebouncer,
}

impl FieldRunner {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let resize = ResizeDebouncer::new(config.resize_debounce_secs);
        let simulator = Simulator::with_viewport(config, width, height, seed);
        Self {
            render_loop: RenderLoop::new(simulator),
            input: InputQueue::new(),
            resize,
        }
    }

    /// Push an input event into the queue. Dropped once the loop is cancelled,
    /// since nothing drains the queue after that.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.render_loop.cancel_token().is_cancelled() {
            return;
        }
        self.input.push(event);
    }

    /// Events waiting for the next frame.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Run one frame: route queued input, apply a settled resize, then draw.
    ///
    /// The debouncer is advanced before this frame's resize events are fed in,
    /// so a new resize only counts time from later frames.
    pub fn tick<S, T>(&mut self, dt: f32, surface: &mut S, theme: &T) -> LoopState
    where
        S: Surface + ?Sized,
        T: ThemeSignal + ?Sized,
    {
        let settled = self.resize.advance(dt);

        for event in self.input.drain() {
            match event {
                InputEvent::Resize { width, height } => self.resize.notify(width, height),
                other => {
                    self.render_loop.simulator_mut().pointer_mut().apply(&other);
                }
            }
        }

        if let Some((width, height)) = settled {
            surface.resize(width, height);
            self.render_loop.simulator_mut().resize(width, height);
        }

        self.render_loop.frame(surface, theme)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.render_loop.cancel_token()
    }

    pub fn simulator(&self) -> &Simulator {
        self.render_loop.simulator()
    }

    pub fn particle_count(&self) -> u32 {
        self.simulator().field().len() as u32
    }

    pub fn frames(&self) -> u64 {
        self.render_loop.frames()
    }
}
