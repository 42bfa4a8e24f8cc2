/// Runtime settings assembled from defaults, config.toml, and environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
