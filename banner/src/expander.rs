//! Text expander
//!
//! Stitches per-character glyphs into a banner, row by row.

use std::borrow::Cow;
use std::fmt;

use crate::glyph::{BorderGlyphs, GlyphRenderer};

/// Written after every banner row, including the last
pub const ROW_DELIMITER: &str = " \n ";

/// Character whose glyph decides how many rows a banner has
const REFERENCE_CHAR: char = 'a';

/// Characters that end a line of text
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Replace every line break with a single space.
///
/// Borrows the input when there is nothing to replace.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_line_break) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|c| if is_line_break(c) { ' ' } else { c })
            .collect(),
    )
}

/// A rendered banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    rows: Vec<String>,
}

impl Banner {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            f.write_str(row)?;
            f.write_str(ROW_DELIMITER)?;
        }
        Ok(())
    }
}

/// Expands text into banners using a glyph renderer
#[derive(Debug, Clone, Default)]
pub struct TextExpander<R = BorderGlyphs> {
    renderer: R,
}

impl<R: GlyphRenderer> TextExpander<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render `text` as a banner.
    ///
    /// Line breaks become spaces so the result is always one block. The
    /// banner height comes from the reference glyph: extra rows of a taller
    /// glyph are dropped and a shorter glyph leaves its missing rows alone.
    pub fn expand(&self, text: &str) -> Banner {
        let text = normalize_line_breaks(text);
        let height = self.renderer.render(REFERENCE_CHAR).height();

        let mut rows = vec![String::new(); height];
        for c in text.chars() {
            let glyph = self.renderer.render(c);
            for (row, part) in rows.iter_mut().zip(glyph.rows()) {
                row.push_str(part);
            }
        }

        Banner { rows }
    }
}

/// Expand `text` with the default glyphs and render it to a string
pub fn expand_text(text: &str) -> String {
    TextExpander::<BorderGlyphs>::default().expand(text).to_string()
}
