//! Process bootstrap: configuration loading and tracing setup.

pub mod config;
pub mod tracing;

pub use config::load_config;
pub use self::tracing::init_tracing_subscriber;
