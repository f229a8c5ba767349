pub mod loader;
pub mod state;
