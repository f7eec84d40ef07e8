pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use primer_domain::config::{ServerConfig, ServiceConfig};
#[cfg(feature = "server")]
pub use crate::server::router::system_router;
