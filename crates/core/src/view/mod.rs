pub mod render;
pub mod state;
pub mod tracker;
