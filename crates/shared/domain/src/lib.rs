//! # Domain Models
//!
//! Pure data shared by the applications (`serde`, `bitflags` only).
//! No I/O, networking or heavy logic: the glyph table, the channel flag set, and
//! the statistics service configuration.

pub mod config;
pub mod flags;
pub mod glyphs;
