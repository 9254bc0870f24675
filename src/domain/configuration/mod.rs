pub mod client_config;
pub mod loader;
pub mod properties;

pub use client_config::ServiceClientConfig;
pub use loader::{load_config, parse_config_content};
pub use properties::Configuration;
