use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `PRIMER__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "PRIMER";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG_FILE: &str = "statistics";

#[primer_derive::primer_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional file overlaid with `PRIMER__*` environment variables.
///
/// 1. **File**: `path` (default `statistics`) in any format the `config` crate detects from the
///    extension; an extension-less path is probed as `.toml`, `.json`, `.yaml`, ...
///    A missing file is not an error: `T`'s serde defaults apply.
/// 2. **Environment**: `PRIMER__SECTION__KEY` maps to `section.key`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source exists but is malformed, or its values do not
/// fit `T`.
///
/// # Example
/// ```rust
/// use primer_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct ToolConfig {
///     verbose: bool,
/// }
///
/// let cfg: ToolConfig = load_config(Some("config/tool")).unwrap_or_default();
/// assert!(!cfg.verbose);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
