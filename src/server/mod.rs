pub mod config;
mod http_layers;
mod movies;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub use movies::ApiError;
pub use server::{make_app, run_server};
pub use state::{GuardedSession, ServerState};
