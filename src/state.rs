// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::vision::VisionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub vision: VisionClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let vision = VisionClient::new(config.vision_endpoint.clone())?;
        Ok(Self { config, vision })
    }
}
