//! Full-screen meter display for mtg.

pub mod render;
pub mod renderer;
pub mod surface;
pub mod terminal;

pub use render::FrameStyle;
pub use renderer::{PeriodicRenderer, RenderError, RendererState, RunOutcome};
pub use surface::{ResourceError, Surface, SurfaceGuard};
pub use terminal::TerminalSurface;
