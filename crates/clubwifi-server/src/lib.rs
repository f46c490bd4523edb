// clubwifi-server: HTTP layer for the club WiFi captive portal.
//
// Exposed as a library so the integration tests can build the router
// in-process; the binary lives in main.rs.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;
