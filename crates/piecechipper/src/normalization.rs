//! # Word Boundary Normalization
//!
//! Piece vocabularies mark word starts with [`WORD_BOUNDARY`] (`'▁'`, U+2581)
//! instead of a literal space. Text is rewritten into that form before
//! segmentation, and decoded text is rewritten back.
//!
//! No other normalization is performed.

use std::borrow::Cow;

/// The reserved glyph standing in for `' '` inside pieces.
pub const WORD_BOUNDARY: char = '\u{2581}';

/// Replace every `' '` with [`WORD_BOUNDARY`].
///
/// Borrows when `text` contains no spaces.
pub fn spaces_to_boundaries(text: &str) -> Cow<'_, str> {
    if text.contains(' ') {
        Cow::Owned(text.replace(' ', WORD_BOUNDARY.encode_utf8(&mut [0; 4])))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace every [`WORD_BOUNDARY`] with `' '`.
pub fn boundaries_to_spaces(text: &str) -> Cow<'_, str> {
    if text.contains(WORD_BOUNDARY) {
        Cow::Owned(text.replace(WORD_BOUNDARY, " "))
    } else {
        Cow::Borrowed(text)
    }
}
