// Session exports
pub mod renderer;
pub mod swipe;

pub use renderer::{Renderer, TracingRenderer};
pub use swipe::{PointerResponse, SwipeSession};
