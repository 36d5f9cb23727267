//! High-level multi-target model API.

mod composite;
mod config;
mod registry;

pub use composite::CompositeModel;
pub use config::{ConfigError, MultiTargetConfig};
pub use registry::{ModelRegistry, WarmStartSource};
