//! Glyph rendering
//!
//! A glyph is the multi-row art block for one character.

/// Height of every glyph produced by [`BorderGlyphs`]
pub const GLYPH_HEIGHT: usize = 3;

const BORDER: &str = "#";

/// Rows of art for a single character, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Maps a character to its glyph.
///
/// Implementations must be total over `char` and should return glyphs of
/// one fixed height; the expander sizes the banner from a single reference
/// glyph.
pub trait GlyphRenderer {
    fn render(&self, c: char) -> Glyph;
}

impl<R: GlyphRenderer + ?Sized> GlyphRenderer for &R {
    fn render(&self, c: char) -> Glyph {
        (**self).render(c)
    }
}

/// Placeholder font: a border row, the character itself, a border row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderGlyphs;

impl GlyphRenderer for BorderGlyphs {
    fn render(&self, c: char) -> Glyph {
        Glyph::new(vec![BORDER.to_string(), c.to_string(), BORDER.to_string()])
    }
}
