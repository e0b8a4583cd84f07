pub mod draw_list;
pub mod theme;
pub mod traits;

// Re-export key types for convenient access
pub use draw_list::{DrawCommand, DrawList};
pub use theme::{Theme, ThemeSignal};
pub use traits::{Rgba, Surface};
