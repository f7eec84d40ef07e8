//! # Digits
//!
//! Draws a numeral as block-letter digits, seven text rows high.
//!
//! ```
//! let rows = primer_digits::render("10").unwrap();
//! assert_eq!(rows[0], " 1     000    ");
//! assert_eq!(rows[6], "111    000    ");
//! ```

mod error;

pub use crate::error::{DigitsError, DigitsErrorExt};

use primer_domain::glyphs::{GLYPH_ROWS, Glyph, glyph};
use tracing::debug;

/// Gap between two glyph columns.
pub const COLUMN_SEPARATOR: &str = "  ";

/// Renders `numeral` as exactly [`GLYPH_ROWS`] lines.
///
/// Every glyph block is followed by [`COLUMN_SEPARATOR`], the last one included. Empty input
/// yields seven empty lines.
///
/// # Errors
/// Returns [`DigitsError::InvalidNumber`] naming the first character outside `0`-`9` and its
/// position. Nothing is rendered in that case.
pub fn render(numeral: &str) -> Result<Vec<String>, DigitsError> {
    let glyphs = glyphs_of(numeral)?;
    let width: usize = glyphs.iter().map(|g| g[0].len() + COLUMN_SEPARATOR.len()).sum();

    let rows: Vec<String> = (0..GLYPH_ROWS)
        .map(|row| {
            glyphs.iter().fold(String::with_capacity(width), |mut line, glyph| {
                line.push_str(glyph[row]);
                line.push_str(COLUMN_SEPARATOR);
                line
            })
        })
        .collect();

    debug!(digits = glyphs.len(), width, "Rendered numeral");
    Ok(rows)
}

fn glyphs_of(numeral: &str) -> Result<Vec<&'static Glyph>, DigitsError> {
    numeral
        .chars()
        .enumerate()
        .map(|(position, c)| {
            glyph(c).ok_or_else(|| DigitsError::InvalidNumber {
                message: format!("{c:?} at position {position} is not a digit").into(),
                context: None,
            })
        })
        .collect()
}
