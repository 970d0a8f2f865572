//! # Landing Server
//!
//! Actix-web application serving the coming-soon page, its themed SVG assets
//! and the rate-limited `POST /api/signup` email capture endpoint.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod templates;

pub use config::AppConfig;
pub use handlers::configure_routes;
pub use state::AppState;
