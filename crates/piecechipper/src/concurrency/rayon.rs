//! # Rayon Batch Wrappers
//!
//! Wrap any [`TokenEncoder`] or [`TokenDecoder`] so that batch calls fan out
//! over the `rayon` thread pool. Single-text calls are passed through.

use core::marker::PhantomData;

use ::rayon::prelude::*;

use crate::{
    decoders::{InvalidTokenPolicy, TokenDecoder},
    encoders::TokenEncoder,
    errors::PCResult,
    types::TokenType,
    vocab::PieceVocab,
};

/// Batch-Level Parallel Encoder Wrapper.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Wrapped encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn vocab(&self) -> &PieceVocab<T> {
        self.inner.vocab()
    }

    fn try_encode_append_normalized(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> PCResult<()> {
        self.inner.try_encode_append_normalized(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<Vec<T>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text, prepend_begin, append_end))
            .collect()
    }
}

/// Batch-Level Parallel Decoder Wrapper.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn vocab(&self) -> &PieceVocab<T> {
        self.inner.vocab()
    }

    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        policy: InvalidTokenPolicy,
        buf: &mut Vec<u8>,
    ) -> PCResult<()> {
        self.inner.try_decode_append_bytes(tokens, policy, buf)
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens))
            .collect()
    }
}
