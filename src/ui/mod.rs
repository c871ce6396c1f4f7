pub mod app;
pub mod components;

pub use app::*;
pub use components::*;

// Re-export constants from app module
pub use app::{MAIN_CSS, TAILWIND_CSS};
