pub mod config;

pub mod logging;

pub mod window;
pub use window::Window;

pub mod input;
pub use input::{InputState, Keys, RasterMode};

pub mod geometry;

pub mod shader;

pub mod frame;

pub mod renderer;
pub use renderer::Renderer;
