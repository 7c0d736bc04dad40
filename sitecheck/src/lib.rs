pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{CheckOptions, expand_path, handle_check, init_tracing};
