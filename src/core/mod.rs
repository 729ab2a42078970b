//! Core types shared across the codebase.

mod env;
mod state;

pub use env::Environment;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
