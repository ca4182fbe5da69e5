pub mod renderer;
pub mod sink;

pub use renderer::Renderer;
pub use sink::FrameSlot;
