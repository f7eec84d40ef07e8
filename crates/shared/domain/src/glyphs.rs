//! Seven-row ASCII-art shapes of the decimal digits.

/// Number of text rows in every glyph.
pub const GLYPH_ROWS: usize = 7;

/// A single digit drawn as [`GLYPH_ROWS`] rows of equal width.
pub type Glyph = [&'static str; GLYPH_ROWS];

/// Glyphs indexed by digit value.
pub const GLYPHS: [Glyph; 10] = [
    ["  000  ", " 0   0 ", "0     0", "0     0", "0     0", " 0   0 ", "  000  "],
    [" 1 ", "11 ", " 1 ", " 1 ", " 1 ", " 1 ", "111"],
    [" 222 ", "2   2", "   2 ", "  2  ", " 2   ", "2    ", "22222"],
    [" 333 ", "3   3", "    3", "  33 ", "    3", "3   3", " 333 "],
    ["   4  ", "  44  ", " 4 4  ", "4  4  ", "444444", "   4  ", "   4  "],
    ["55555", "5    ", "5    ", " 555 ", "    5", "5   5", " 555 "],
    [" 666 ", "6    ", "6    ", "6666 ", "6   6", "6   6", " 666 "],
    ["77777", "    7", "   7 ", "  7  ", " 7   ", "7    ", "7    "],
    [" 888 ", "8   8", "8   8", " 888 ", "8   8", "8   8", " 888 "],
    [" 9999", "9   9", "9   9", " 9999", "    9", "    9", "    9"],
];

/// Glyph of an ASCII digit character, `None` for anything else.
#[must_use]
pub fn glyph(digit: char) -> Option<&'static Glyph> {
    digit.to_digit(10).and_then(|value| GLYPHS.get(value as usize))
}
