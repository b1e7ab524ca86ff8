//! # Piece Vocabularies
//!
//! A [`PieceVocab`] is built once from an ordered list of [`PieceRecord`]s;
//! each record's id is its position in the list.
//!
//! Per [`PieceKind`]:
//! * `Normal` - inserted as `{ text <-> id }`.
//! * `Byte` - `<0xHH>` is decoded to a single raw byte, then inserted.
//! * `Unknown` - becomes the unknown id, and is inserted under its literal text.
//! * `Control` - `<s>` and `</s>` become the begin and end ids; others are ignored.
//!
//! See [`io`] to load a vocabulary from a `tokenizer.model` file.

pub mod io;

mod byte_pieces;
mod piece_record;
mod piece_vocab;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use byte_pieces::{format_byte_piece, parse_byte_piece};
#[doc(inline)]
pub use piece_record::{PieceKind, PieceRecord};
#[doc(inline)]
pub use piece_vocab::{BEGIN_PIECE, END_PIECE, PieceVocab, PieceVocabBuilder, UNKNOWN_PLACEHOLDER};
