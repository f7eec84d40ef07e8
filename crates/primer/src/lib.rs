//! Facade crate for the primer programs and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Add `primer` with the `server` feature for the HTTP surface.
//! - Mount [`server::router`] under an axum `Router`.

pub use primer_domain as domain;
pub use primer_kernel as kernel;

/// Feature slices and build-time feature introspection.
pub mod features {
    pub use primer_digits as digits;
    pub use primer_statistics as statistics;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "digits",
        "statistics",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use axum::Router;

    pub use primer_kernel::server::router::system_router;

    /// All HTTP routes: the statistics form plus the system endpoints.
    pub fn router<S>() -> Router<S>
    where
        S: Send + Sync + Clone + 'static,
    {
        primer_statistics::router().merge(system_router())
    }
}
