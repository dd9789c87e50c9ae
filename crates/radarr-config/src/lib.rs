pub mod config;
pub mod paths;

pub use config::{
    RadarrConfig, DEFAULT_API_VERSION, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
};
pub use paths::default_config_path;
