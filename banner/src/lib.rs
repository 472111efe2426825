//! Large-character banners
//!
//! Re-renders a line of text as a fixed-height block of ASCII art:
//! every character becomes a [`Glyph`], and the glyphs are stitched
//! together row by row into a [`Banner`].
//!
//! ```
//! use tweetfmt_banner::expand_text;
//!
//! assert_eq!(expand_text("ab"), "## \n ab \n ## \n ");
//! ```

pub mod expander;
pub mod glyph;

pub use expander::{
    expand_text, is_line_break, normalize_line_breaks, Banner, TextExpander, ROW_DELIMITER,
};
pub use glyph::{BorderGlyphs, Glyph, GlyphRenderer, GLYPH_HEIGHT};
