//! Terminal frontend: an in-memory surface, a crossterm renderer and the
//! scene compositor that draws game state onto the surface.

pub mod renderer;
pub mod surface;
pub mod view;

pub use renderer::TerminalRenderer;
pub use surface::{Glyph, Rgb, Style, Surface};
pub use view::{GameView, Scene, Viewport};
