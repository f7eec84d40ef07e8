//! # Statistics
//!
//! Descriptive statistics for a free-text list of numbers, served as a single HTML form.
//!
//! * [`parse_numbers`] turns `"1, 2 3"` into floats, rejecting the whole list on the first
//!   bad token.
//! * [`Statistics::compute`] sorts and summarizes: mean, median, population standard
//!   deviation and a one-decimal mode with a smallest-value tie-break.
//! * [`page`] lays the result out as HTML; with the `server` feature, [`router`] mounts
//!   `GET/POST /`.
//!
//! ```
//! let stats = primer_statistics::analyze("5 5 5 6").unwrap().unwrap();
//! assert_eq!(stats.mode(), 5.0);
//! ```

mod error;
#[cfg(feature = "server")]
mod handler;
pub mod page;
mod parse;
mod summary;

pub use crate::error::{StatisticsError, StatisticsErrorExt};
#[cfg(feature = "server")]
pub use crate::handler::{StatisticsForm, router, statistics_page};
pub use crate::parse::parse_numbers;
pub use crate::summary::Statistics;

use tracing::{debug, warn};

/// Parses and summarizes one submission.
///
/// `Ok(None)` means there was nothing to compute (blank input), which is not an error.
///
/// # Errors
/// Returns [`StatisticsError::InvalidToken`] for the first unparsable token.
pub fn analyze(text: &str) -> Result<Option<Statistics>, StatisticsError> {
    let numbers = parse_numbers(text).inspect_err(|err| warn!(%err, "Rejected submission"))?;
    let stats = Statistics::compute(numbers);

    if let Some(stats) = &stats {
        debug!(
            count = stats.count(),
            mean = stats.mean(),
            median = stats.median(),
            mode = stats.mode(),
            "Computed statistics"
        );
    }

    Ok(stats)
}
