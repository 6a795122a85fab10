//! bluegreen: a demo page for blue-green deployment switching.
//!
//! Serves an HTML page colored by the configured version label and a JSON
//! health check reporting that label.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
pub mod version;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
