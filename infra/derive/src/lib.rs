#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates:
//!
//! * [`macro@main`] bootstraps a preconfigured Tokio runtime around an `async fn`.
//! * [`macro@primer_error`] turns an enum into a `thiserror` error with context support.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros;
//! the consuming crates (`primer-runtime`, `primer-logger`, features) exercise them.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap the workspace Tokio runtime.
///
/// Transforms an `async fn` returning a `Result` into a plain `fn` that builds a
/// runtime from the selected `primer_runtime::RuntimeConfig` preset and blocks on the body.
///
/// # Arguments
///
/// * `server` - Long-lived network services.
/// * `compact` - Short-lived tools where the footprint matters more than throughput.
/// * `default` (or no argument) - Worker threads auto-detected, default stack.
///
/// # Examples
///
/// ```rust,ignore
/// #[primer_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **`format_context`**: A private helper usable inside `#[error(...)]` strings that renders
///   the optional context as ` (context)`.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use primer_derive::primer_error;
/// use std::borrow::Cow;
///
/// #[primer_error]
/// pub enum ReportError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ReportError> {
///     std::fs::read_to_string(path).context("Reading report template")
/// }
/// ```
#[proc_macro_attribute]
pub fn primer_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
