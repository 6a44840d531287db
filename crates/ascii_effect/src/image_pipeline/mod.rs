pub mod color;
pub mod loader;
pub mod resize;
pub mod sink;
