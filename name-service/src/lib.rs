pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::providers::TextProvider;
use services::NameGenerator;
use std::sync::Arc;

/// Shared application state, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub generator: NameGenerator,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            generator: NameGenerator::new(provider),
        }
    }
}
