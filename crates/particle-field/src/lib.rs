//! Headless core of a decorative, pointer-reactive particle field.
//!
//! Particles drift down the viewport with a gentle sway, scatter away from the
//! pointer, and are linked by faint lines near it. Nothing here touches the DOM;
//! hosts supply a [`Surface`] to draw on and a [`ThemeSignal`] to read.

pub mod api;
pub mod core;
pub mod field;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::render_loop::{CancelToken, LoopState, RenderLoop};
pub use api::simulator::Simulator;
pub use crate::core::debounce::ResizeDebouncer;
pub use crate::core::rng::Rng;
pub use field::{Field, Particle};
pub use input::pointer::PointerTracker;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::draw_list::{DrawCommand, DrawList};
pub use renderer::theme::{Theme, ThemeSignal};
pub use renderer::traits::{Rgba, Surface};
