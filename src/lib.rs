pub mod api;
pub mod config;
pub mod models;
pub mod service;

pub use api::create_client;
pub use config::AppConfig;
pub use service::ReplenishPreviewService;
