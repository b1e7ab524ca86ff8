//! # Piece Table [`TokenDecoder`]

use std::sync::Arc;

use crate::{
    decoders::{InvalidTokenPolicy, TokenDecoder},
    errors::{PCError, PCResult},
    types::{TokenType, token_to_u64},
    vocab::{PieceVocab, UNKNOWN_PLACEHOLDER},
};

/// Decodes tokens by concatenating their pieces.
///
/// * begin/end ids are skipped wherever they appear;
/// * the unknown id renders as [`UNKNOWN_PLACEHOLDER`];
/// * other ids render as their piece bytes.
#[derive(Debug, Clone)]
pub struct PieceDecoder<T: TokenType> {
    vocab: Arc<PieceVocab<T>>,
}

impl<T: TokenType> PieceDecoder<T> {
    /// Build a decoder over a shared vocabulary.
    pub fn new(vocab: Arc<PieceVocab<T>>) -> Self {
        Self { vocab }
    }
}

impl<T: TokenType> TokenDecoder<T> for PieceDecoder<T> {
    fn vocab(&self) -> &PieceVocab<T> {
        &self.vocab
    }

    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
        buf: &mut Vec<u8>,
    ) -> PCResult<()> {
        let unknown_id = self.vocab.unknown_id();
        for &token in tokens {
            if self.vocab.is_control(token) {
                continue;
            }
            if Some(token) == unknown_id {
                buf.extend_from_slice(UNKNOWN_PLACEHOLDER.as_bytes());
                continue;
            }
            match (self.vocab.lookup_piece(token), policy) {
                (Some(piece), _) => buf.extend_from_slice(piece),
                (None, InvalidTokenPolicy::Skip) => {
                    log::trace!("skipping token {token:?} with no piece");
                }
                (None, InvalidTokenPolicy::Error) => {
                    return Err(PCError::InvalidTokenId {
                        id: token_to_u64(token),
                    });
                }
            }
        }
        Ok(())
    }
}
