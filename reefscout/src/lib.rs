pub mod handlers;
pub mod repl;
pub mod terminal;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    Connection, DEFAULT_BASE_URL, new_session, parse_lng_lat, terminal_controller, terminal_page,
};
pub use repl::{Command, Session, parse_command};
