use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Port the statistics service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 9001;

/// Top-level configuration of the statistics service.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfigInner {
    pub server: ServerConfig,
}

/// Arc-wrapped config, cheap to clone into handlers and tasks.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten, default)]
    inner: Arc<ServiceConfigInner>,
}

impl Deref for ServiceConfig {
    type Target = ServiceConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ServiceConfig {
    fn deref_mut(&mut self) -> &mut ServiceConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Upper bound for draining in-flight requests on shutdown.
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            shutdown_timeout_secs: 30,
        }
    }
}
