//! Configuration system for lazyproto.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod lazy_config;
pub mod naming_config;
pub mod scan_config;
pub mod schema_config;

pub use lazy_config::LazyConfig;
pub use naming_config::NamingConfig;
pub use scan_config::ScanConfig;
pub use schema_config::SchemaConfig;
