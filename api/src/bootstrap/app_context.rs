use std::sync::Arc;

use crate::application::ports::chat_responder::ChatResponder;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    chat_responder: Arc<dyn ChatResponder>,
}

impl AppServices {
    pub fn new(chat_responder: Arc<dyn ChatResponder>) -> Self {
        Self { chat_responder }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn chat_responder(&self) -> Arc<dyn ChatResponder> {
        self.services.chat_responder.clone()
    }
}
