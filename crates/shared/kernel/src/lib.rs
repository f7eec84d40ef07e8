//! Kernel utilities shared by the service applications.
//! Keep this crate lightweight: configuration loading and the system routes every
//! HTTP app mounts.
//!
//! ## Config loading
//! ```rust
//! use primer_kernel::config::load_config;
//! use primer_kernel::domain::config::ServiceConfig;
//!
//! let cfg: ServiceConfig = load_config(Some("does-not-exist")).unwrap();
//! assert_eq!(cfg.server.port, 9001);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use primer_domain as domain;
