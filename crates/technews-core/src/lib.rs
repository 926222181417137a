//! Shared domain types and configuration for the tech-news workspace.

pub mod app_config;
pub mod article;
pub mod config;
pub mod error;

pub use app_config::{AppConfig, Environment};
pub use article::{Article, ArticleId};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
