//! # Token Decoder Trait

use std::sync::Arc;

use crate::{
    errors::PCResult,
    normalization::boundaries_to_spaces,
    types::TokenType,
    vocab::PieceVocab,
};

/// What a decoder does with a token id that has no piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidTokenPolicy {
    /// Contribute nothing.
    #[default]
    Skip,

    /// Fail with [`crate::PCError::InvalidTokenId`].
    Error,
}

/// A trait for decoding token ids into text.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// The vocabulary this decoder reads.
    fn vocab(&self) -> &PieceVocab<T>;

    /// Append the raw piece bytes for `tokens`.
    ///
    /// Word-boundary markers are left in place.
    ///
    /// ## Arguments
    /// * `tokens` - the token ids.
    /// * `policy` - handling of ids with no piece.
    /// * `buf` - the target byte buffer.
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
        buf: &mut Vec<u8>,
    ) -> PCResult<()>;

    /// Decode tokens to text under an explicit [`InvalidTokenPolicy`].
    ///
    /// Invalid UTF-8 (from partial byte-piece sequences) is replaced
    /// with U+FFFD; word-boundary markers become spaces.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens))
    )]
    fn try_decode_with(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
    ) -> PCResult<String> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append_bytes(tokens, policy, &mut buf)?;

        let text = match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        Ok(boundaries_to_spaces(&text).into_owned())
    }

    /// Decode tokens to text; ids with no piece are skipped.
    ///
    /// Never fails.
    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        // `Skip` has no error path.
        self.try_decode_with(tokens, InvalidTokenPolicy::Skip)
            .unwrap_or_default()
    }

    /// Decode tokens to text; ids with no piece are an error.
    fn try_decode(
        &self,
        tokens: &[T],
    ) -> PCResult<String> {
        self.try_decode_with(tokens, InvalidTokenPolicy::Error)
    }

    /// Decode a batch of token sequences; ids with no piece are skipped.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}

impl<T, D> TokenDecoder<T> for Arc<D>
where
    T: TokenType,
    D: TokenDecoder<T> + ?Sized,
{
    fn vocab(&self) -> &PieceVocab<T> {
        (**self).vocab()
    }

    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
        buf: &mut Vec<u8>,
    ) -> PCResult<()> {
        (**self).try_decode_append_bytes(tokens, policy, buf)
    }

    fn try_decode_with(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
    ) -> PCResult<String> {
        (**self).try_decode_with(tokens, policy)
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        (**self).decode_batch(batch)
    }
}
