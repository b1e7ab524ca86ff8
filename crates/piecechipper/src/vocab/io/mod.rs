//! # Vocabulary IO
//!
//! Vocabularies are read from `SentencePiece` `ModelProto` buffers
//! (`tokenizer.model` files).
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use piecechipper::{PieceVocab, vocab::io::load_vocab_path};
//!
//! fn example() -> piecechipper::PCResult<Arc<PieceVocab<u32>>> {
//!     let vocab: PieceVocab<u32> = load_vocab_path("tokenizer.model")?;
//!     Ok(Arc::new(vocab))
//! }
//! ```

mod model_proto;

use std::{io::Read, path::Path};

#[doc(inline)]
pub use model_proto::{ModelProto, PieceProto};
use prost::Message;

use crate::{
    errors::PCResult,
    types::TokenType,
    vocab::{PieceKind, PieceRecord, PieceVocab, PieceVocabBuilder},
};

/// Decode a `ModelProto` buffer.
///
/// ## Returns
/// The message, or [`crate::PCError::MalformedVocabulary`] on a protobuf or UTF-8 failure.
pub fn read_model_proto(data: &[u8]) -> PCResult<ModelProto> {
    Ok(ModelProto::decode(data)?)
}

/// Build a [`PieceVocab`] from a decoded `ModelProto`.
///
/// `USER_DEFINED` and `UNUSED` pieces keep their id but get no table entry.
pub fn vocab_from_model_proto<T: TokenType>(proto: &ModelProto) -> PCResult<PieceVocab<T>> {
    let mut builder = PieceVocabBuilder::new();
    for piece in &proto.pieces {
        let wire = piece.kind.unwrap_or(PieceKind::WIRE_NORMAL);
        match PieceKind::from_wire(wire)? {
            Some(kind) => {
                let record = PieceRecord {
                    text: piece.piece.clone().unwrap_or_default(),
                    kind,
                    score: piece.score.unwrap_or_default(),
                };
                builder.push(&record)?;
            }
            None => {
                let id = builder.skip()?;
                log::debug!("skipping piece {id:?} of reserved type {wire}");
            }
        }
    }
    Ok(builder.build())
}

/// Load a [`PieceVocab`] from a `ModelProto` buffer.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(data)))]
pub fn load_vocab_bytes<T: TokenType>(data: &[u8]) -> PCResult<PieceVocab<T>> {
    vocab_from_model_proto(&read_model_proto(data)?)
}

/// Load a [`PieceVocab`] from a reader.
pub fn load_vocab_reader<T, R>(mut reader: R) -> PCResult<PieceVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    load_vocab_bytes(&data)
}

/// Load a [`PieceVocab`] from a `tokenizer.model` path.
pub fn load_vocab_path<T, P>(path: P) -> PCResult<PieceVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading piece vocab from {}", path.display());
    load_vocab_bytes(&std::fs::read(path)?)
}

/// Serialize records as a `ModelProto` buffer.
pub fn save_vocab_bytes(records: &[PieceRecord]) -> Vec<u8> {
    ModelProto {
        pieces: records
            .iter()
            .map(|record| PieceProto {
                piece: Some(record.text.clone()),
                score: Some(record.score),
                kind: Some(record.kind.to_wire()),
            })
            .collect(),
    }
    .encode_to_vec()
}

/// Serialize records as a `ModelProto` file.
pub fn save_vocab_path<P: AsRef<Path>>(
    records: &[PieceRecord],
    path: P,
) -> PCResult<()> {
    std::fs::write(path, save_vocab_bytes(records))?;
    Ok(())
}
