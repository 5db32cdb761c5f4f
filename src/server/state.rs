use axum::extract::FromRef;

use crate::input::InputProcessor;
use crate::session::CatalogSession;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::ServerConfig;

pub type GuardedSession = Arc<Mutex<CatalogSession>>;
pub type GuardedInputProcessor = Arc<InputProcessor>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub session: GuardedSession,
    pub input_processor: GuardedInputProcessor,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        session: GuardedSession,
        input_processor: InputProcessor,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            session,
            input_processor: Arc::new(input_processor),
        }
    }
}

impl FromRef<ServerState> for GuardedSession {
    fn from_ref(input: &ServerState) -> Self {
        input.session.clone()
    }
}

impl FromRef<ServerState> for GuardedInputProcessor {
    fn from_ref(input: &ServerState) -> Self {
        input.input_processor.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
