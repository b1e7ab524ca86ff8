//! # Tokenizer

use std::{io::Read, path::Path, sync::Arc};

use crate::{
    decoders::{DefaultTokenDecoder, TokenDecoder},
    encoders::{DefaultTokenEncoder, TokenEncoder},
    errors::PCResult,
    types::TokenType,
    vocab::{
        PieceRecord,
        PieceVocab,
        io::{load_vocab_bytes, load_vocab_path, load_vocab_reader},
    },
};

/// A shared vocabulary bundled with an encoder and a decoder.
///
/// Cheap to clone; all parts are reference counted.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<PieceVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Build a tokenizer with the default encoder and decoder.
    ///
    /// With the `rayon` feature, batch calls run in parallel.
    pub fn new(vocab: Arc<PieceVocab<T>>) -> Self {
        let encoder = DefaultTokenEncoder::new(vocab.clone());
        let decoder = DefaultTokenDecoder::new(vocab.clone());

        #[cfg(feature = "rayon")]
        let (encoder, decoder) = (
            crate::concurrency::rayon::ParallelRayonEncoder::<T, _>::new(encoder),
            crate::concurrency::rayon::ParallelRayonDecoder::<T, _>::new(decoder),
        );

        Self {
            vocab,
            encoder: Arc::new(encoder),
            decoder: Arc::new(decoder),
        }
    }

    /// Replace the encoder.
    ///
    /// The encoder should read the same vocabulary.
    pub fn with_encoder(
        self,
        encoder: Arc<dyn TokenEncoder<T>>,
    ) -> Self {
        Self { encoder, ..self }
    }

    /// Replace the decoder.
    ///
    /// The decoder should read the same vocabulary.
    pub fn with_decoder(
        self,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self { decoder, ..self }
    }

    /// Build a tokenizer from piece records.
    pub fn from_records(records: &[PieceRecord]) -> PCResult<Self> {
        Ok(Self::new(Arc::new(PieceVocab::from_records(records)?)))
    }

    /// Load a tokenizer from a `ModelProto` buffer.
    pub fn load_bytes(data: &[u8]) -> PCResult<Self> {
        Ok(Self::new(Arc::new(load_vocab_bytes(data)?)))
    }

    /// Load a tokenizer from a reader.
    pub fn load_reader<R: Read>(reader: R) -> PCResult<Self> {
        Ok(Self::new(Arc::new(load_vocab_reader(reader)?)))
    }

    /// Load a tokenizer from a `tokenizer.model` path.
    pub fn load_path<P: AsRef<Path>>(path: P) -> PCResult<Self> {
        Ok(Self::new(Arc::new(load_vocab_path(path)?)))
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<PieceVocab<T>> {
        &self.vocab
    }

    /// The encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// The decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }

    /// Encode text; see [`TokenEncoder::try_encode`].
    pub fn encode(
        &self,
        text: &str,
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<T>> {
        self.encoder.try_encode(text, prepend_begin, append_end)
    }

    /// Encode a batch of texts; see [`TokenEncoder::try_encode_batch`].
    pub fn encode_batch(
        &self,
        batch: &[&str],
        prepend_begin: bool,
        append_end: bool,
    ) -> PCResult<Vec<Vec<T>>> {
        self.encoder
            .try_encode_batch(batch, prepend_begin, append_end)
    }

    /// Decode tokens, skipping ids with no piece; see [`TokenDecoder::decode`].
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.decoder.decode(tokens)
    }

    /// Decode tokens, failing on ids with no piece; see [`TokenDecoder::try_decode`].
    pub fn try_decode(
        &self,
        tokens: &[T],
    ) -> PCResult<String> {
        self.decoder.try_decode(tokens)
    }

    /// Decode a batch of token sequences; see [`TokenDecoder::decode_batch`].
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        self.decoder.decode_batch(batch)
    }

    /// See [`PieceVocab::vocab_size`].
    pub fn vocab_size(&self) -> usize {
        self.vocab.vocab_size()
    }

    /// The `<s>` id, if present.
    pub fn begin_id(&self) -> Option<T> {
        self.vocab.begin_id()
    }

    /// The `</s>` id, if present.
    pub fn end_id(&self) -> Option<T> {
        self.vocab.end_id()
    }

    /// The unknown-token id, if present.
    pub fn unknown_id(&self) -> Option<T> {
        self.vocab.unknown_id()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{
        encoders::IncrementalMatchEncoder,
        errors::PCError,
        vocab::{
            io::save_vocab_bytes,
            testing::{byte_fallback_test_records, hello_world_test_records},
        },
    };

    #[test]
    fn test_hello_world() {
        let data = save_vocab_bytes(&hello_world_test_records());
        let tokenizer: Tokenizer<u32> = Tokenizer::load_bytes(&data).unwrap();

        assert_eq!(tokenizer.begin_id(), Some(1));
        assert_eq!(tokenizer.end_id(), Some(2));
        assert_eq!(tokenizer.unknown_id(), None);
        assert_eq!(tokenizer.vocab_size(), 6);

        let tokens = tokenizer.encode(" Hello, world!", true, true).unwrap();
        assert_eq!(tokens, vec![1, 10, 11, 12, 13, 2]);
        assert_eq!(tokenizer.decode(&tokens), " Hello, world!");
        assert_eq!(tokenizer.try_decode(&tokens).unwrap(), " Hello, world!");

        assert!(matches!(
            tokenizer.encode("Hello", false, false),
            Err(PCError::UnknownToken { ch: 'H', .. })
        ));
        assert!(matches!(
            tokenizer.try_decode(&[10, 4]),
            Err(PCError::InvalidTokenId { id: 4 })
        ));
    }

    #[test]
    fn test_swap_encoder() {
        let tokenizer: Tokenizer<u16> =
            Tokenizer::from_records(&byte_fallback_test_records()).unwrap();
        let incremental = tokenizer
            .clone()
            .with_encoder(Arc::new(IncrementalMatchEncoder::new(tokenizer.vocab().clone())));

        let batch = ["Hello, world!", " été", "日本人 €"];
        assert_eq!(
            tokenizer.encode_batch(&batch, true, false).unwrap(),
            incremental.encode_batch(&batch, true, false).unwrap(),
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let tokenizer: Tokenizer<u32> =
            Tokenizer::from_records(&byte_fallback_test_records()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let tokenizer = tokenizer.clone();
                thread::spawn(move || {
                    let text = format!(" thread {i}: Grüße, 世界!");
                    let tokens = tokenizer.encode(&text, true, true).unwrap();
                    (text, tokenizer.decode(&tokens))
                })
            })
            .collect();

        for handle in handles {
            let (text, decoded) = handle.join().unwrap();
            assert_eq!(decoded, text);
        }
    }
}
