//! HTTP server module.
//!
//! Plain HTTP only. The server includes graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
