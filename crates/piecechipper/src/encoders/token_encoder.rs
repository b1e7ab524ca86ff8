//! # Token Encoder Trait

use std::sync::Arc;

use crate::{
    errors::PCResult,
    normalization::spaces_to_boundaries,
    types::TokenType,
    vocab::PieceVocab,
};

/// Expected bytes per emitted token; used for buffer size hints.
const EXPECTED_BYTES_PER_TOKEN: usize = 3;

/// A trait for encoding text into token ids.
///
/// Implementors provide [`TokenEncoder::try_encode_append_normalized`];
/// the remaining methods handle word-boundary normalization, the begin/end
/// control tokens, and batches.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// The vocabulary this encoder reads.
    fn vocab(&self) -> &PieceVocab<T>;

    /// Segment already-normalized text, appending content tokens.
    ///
    /// ## Arguments
    /// * `text` - text with spaces already replaced by the word-boundary marker.
    /// * `tokens` - the target token buffer to append to.
    ///
    /// ## Returns
    /// [`crate::PCError::UnknownToken`] if a character has no piece and no fallback;
    /// `tokens` may hold a partial segmentation in that case.
    fn try_encode_append_normalized(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> PCResult<()>;

    /// Encode text, appending to a token buffer.
    ///
    /// On error, `tokens` is restored to its original length.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    /// * `prepend_begin` - emit the `<s>` id first, if the vocab has one.
    /// * `append_end` - emit the `</s>` id last, if the vocab has one.
    /// * `tokens` - the target token buffer to append to.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn try_encode_append(
        &self,
        text: &str,
        prepend_begin: bool,
        append_end: bool,
        tokens: &mut Vec<T>,
    ) -> PCResult<()> {
        let start = tokens.len();
        let vocab = self.vocab();

        if prepend_begin && let Some(begin_id) = vocab.begin_id() {
            tokens.push(begin_id);
        }

        let normalized = spaces_to_boundaries(text);
        if let Err(err) = self.try_encode_append_normalized(&normalized, tokens) {
            tokens.truncate(start);
            return Err(err);
        }

        if append_end && let Some(end_id) = vocab.end_id() {
            tokens.push(end_id);
        }
        Ok(())
    }

    /// Encode text into a new token buffer.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    /// * `prepend_begin` - emit the `<s>` id first, if the vocab has one.
    /// * `append_end` - emit the `</s>` id last, if the vocab has one.
    fn try_encode(
        &self,
        text: &str,
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_TOKEN + 2);
        self.try_encode_append(text, prepend_begin, append_end, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of texts.
    ///
    /// Fails on the first text that fails.
    fn try_encode_batch(
        &self,
        batch: &[&str],
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<Vec<T>>> {
        batch
            .iter()
            .map(|text| self.try_encode(text, prepend_begin, append_end))
            .collect()
    }
}

impl<T, E> TokenEncoder<T> for Arc<E>
where
    T: TokenType,
    E: TokenEncoder<T> + ?Sized,
{
    fn vocab(&self) -> &PieceVocab<T> {
        (**self).vocab()
    }

    fn try_encode_append_normalized(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> PCResult<()> {
        (**self).try_encode_append_normalized(text, tokens)
    }

    fn try_encode_append(
        &self,
        text: &str,
        prepend_begin: bool,
        append_end: bool,
        tokens: &mut Vec<T>,
    ) -> PCResult<()> {
        (**self).try_encode_append(text, prepend_begin, append_end, tokens)
    }

    fn try_encode(
        &self,
        text: &str,
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<T>> {
        (**self).try_encode(text, prepend_begin, append_end)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<Vec<T>>> {
        (**self).try_encode_batch(batch, prepend_begin, append_end)
    }
}
