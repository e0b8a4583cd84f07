use std::cell::Cell;
use std::rc::Rc;

use crate::api::simulator::Simulator;
use crate::renderer::theme::ThemeSignal;
use crate::renderer::traits::Surface;

/// Revocable handle for a [`RenderLoop`]. Clones share one flag.
/// Single-threaded: the loop and its input handlers live on the same thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Whether the loop wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Cancelled,
}

/// Frame driver around a [`Simulator`]. The host's display-sync primitive
/// calls [`RenderLoop::frame`] once per refresh; each frame runs to completion.
pub struct RenderLoop {
    simulator: Simulator,
    token: CancelToken,
    frames: u64,
}

impl RenderLoop {
    pub fn new(simulator: Simulator) -> Self {
        Self {
            simulator,
            token: CancelToken::new(),
            frames: 0,
        }
    }

    /// A handle that stops the loop at the next frame boundary.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Run one full tick unless cancelled. A cancelled loop draws nothing.
    pub fn frame<S, T>(&mut self, surface: &mut S, theme: &T) -> LoopState
    where
        S: Surface + ?Sized,
        T: ThemeSignal + ?Sized,
    {
        if self.token.is_cancelled() {
            return LoopState::Cancelled;
        }
        self.simulator.tick(surface, theme);
        self.frames += 1;
        LoopState::Running
    }

    /// Drive frames until cancelled or until `wait_for_frame` reports that the
    /// host will not deliver another frame. `wait_for_frame` is the host's
    /// vsync wait and may also feed input into the simulator between frames.
    pub fn run<S, T, W>(&mut self, surface: &mut S, theme: &T, mut wait_for_frame: W)
    where
        S: Surface + ?Sized,
        T: ThemeSignal + ?Sized,
        W: FnMut(&mut Simulator) -> bool,
    {
        while wait_for_frame(&mut self.simulator) {
            if self.frame(surface, theme) == LoopState::Cancelled {
                break;
            }
        }
        log::info!("render loop stopped after {} frames", self.frames);
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn simulator_mut(&mut self) -> &mut Simulator {
        &mut self.simulator
    }
}
