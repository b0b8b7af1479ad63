pub mod renderer;
pub(crate) mod walker;

pub use renderer::*;
