//! API 层模块

mod extract;
mod handlers;
mod routes;
mod state;

pub use routes::router;
pub use state::AppState;
