//! # Longest-Match [`TokenEncoder`]

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    errors::PCResult,
    types::TokenType,
    vocab::PieceVocab,
};

/// Greedy maximal-munch encoder.
///
/// At each position, probes the vocabulary for the longest prefix, from
/// [`PieceVocab::max_piece_len`] bytes down to one character, that is a piece.
/// Unmatched characters go through [`PieceVocab::append_fallback_tokens`].
#[derive(Debug, Clone)]
pub struct LongestMatchEncoder<T: TokenType> {
    vocab: Arc<PieceVocab<T>>,
}

impl<T: TokenType> LongestMatchEncoder<T> {
    /// Build an encoder over a shared vocabulary.
    pub fn new(vocab: Arc<PieceVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Find the longest piece starting at `offset`.
    ///
    /// Only lengths ending on a character boundary are probed.
    ///
    /// ## Returns
    /// `(byte_len, token)` of the match, if any.
    pub fn longest_match(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, T)> {
        let rest = &text[offset..];
        let max_len = self.vocab.max_piece_len().min(rest.len());

        (1..=max_len)
            .rev()
            .filter(|&len| rest.is_char_boundary(len))
            .find_map(|len| {
                self.vocab
                    .lookup_token(rest[..len].as_bytes())
                    .map(|token| (len, token))
            })
    }
}

impl<T: TokenType> TokenEncoder<T> for LongestMatchEncoder<T> {
    fn vocab(&self) -> &PieceVocab<T> {
        &self.vocab
    }

    fn try_encode_append_normalized(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> PCResult<()> {
        let mut offset = 0;
        while offset < text.len() {
            offset += match self.longest_match(text, offset) {
                Some((len, token)) => {
                    tokens.push(token);
                    len
                }
                None => self.vocab.append_fallback_tokens(text, offset, tokens)?,
            };
        }
        Ok(())
    }
}
