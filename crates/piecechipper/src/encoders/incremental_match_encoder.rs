//! # Incremental-Match [`TokenEncoder`]
//!
//! Grows a candidate one character at a time, and commits the longest piece
//! seen once the candidate stops being a prefix of any piece.
//!
//! Produces the same tokens as [`super::LongestMatchEncoder`]; it trades a
//! prefix set built at construction for fewer failed lookups on long
//! vocabularies.

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    errors::PCResult,
    types::{PCHashSet, TokenType},
    vocab::PieceVocab,
};

/// Character-incremental greedy encoder.
#[derive(Debug, Clone)]
pub struct IncrementalMatchEncoder<T: TokenType> {
    vocab: Arc<PieceVocab<T>>,

    /// Every non-empty byte prefix of every piece, pieces included.
    prefixes: Arc<PCHashSet<Vec<u8>>>,
}

impl<T: TokenType> IncrementalMatchEncoder<T> {
    /// Build an encoder over a shared vocabulary.
    pub fn new(vocab: Arc<PieceVocab<T>>) -> Self {
        let mut prefixes = PCHashSet::default();
        for (piece, _) in vocab.pieces() {
            for len in 1..=piece.len() {
                prefixes.insert(piece[..len].to_vec());
            }
        }
        log::debug!("built prefix set: {} prefixes", prefixes.len());

        Self {
            vocab,
            prefixes: Arc::new(prefixes),
        }
    }

    /// Find the longest piece starting at `offset`.
    ///
    /// ## Returns
    /// `(byte_len, token)` of the match, if any.
    pub fn longest_match(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, T)> {
        let rest = &text[offset..];
        let max_len = self.vocab.max_piece_len();

        let mut best = None;
        for (idx, ch) in rest.char_indices() {
            let end = idx + ch.len_utf8();
            if end > max_len {
                break;
            }
            let candidate = &rest.as_bytes()[..end];
            if !self.prefixes.contains(candidate) {
                break;
            }
            if let Some(token) = self.vocab.lookup_token(candidate) {
                best = Some((end, token));
            }
        }
        best
    }
}

impl<T: TokenType> TokenEncoder<T> for IncrementalMatchEncoder<T> {
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
