//! HTTP surface: router, handlers, shared state, and error mapping.

mod error;
pub mod handlers;
mod routes;
mod state;

pub use routes::router;
pub use state::AppState;
