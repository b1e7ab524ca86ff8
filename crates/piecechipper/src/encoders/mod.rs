//! # Token Encoders
//!
//! Encoding replaces spaces with the word-boundary marker, then segments
//! greedily: at each position the longest vocabulary piece wins. A character
//! with no piece falls back to its UTF-8 byte pieces, then to the unknown
//! token, and otherwise fails the call with [`crate::PCError::UnknownToken`].
//!
//! Two segmentation strategies are provided; they produce identical tokens:
//! * [`LongestMatchEncoder`] - probes from the longest piece length down.
//! * [`IncrementalMatchEncoder`] - grows a candidate over a prefix set.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use piecechipper::{
//!     PieceVocab,
//!     TokenEncoder,
//!     encoders::DefaultTokenEncoder,
//!     vocab::PieceRecord,
//! };
//!
//! let records = vec![
//!     PieceRecord::control("<s>"),
//!     PieceRecord::control("</s>"),
//!     PieceRecord::normal("▁hi"),
//!     PieceRecord::normal("!"),
//! ];
//! let vocab: Arc<PieceVocab<u32>> = Arc::new(PieceVocab::from_records(&records).unwrap());
//! let encoder = DefaultTokenEncoder::new(vocab);
//!
//! assert_eq!(encoder.try_encode(" hi!", true, true).unwrap(), vec![0, 2, 3, 1]);
//! ```

mod incremental_match_encoder;
mod longest_match_encoder;
mod token_encoder;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use incremental_match_encoder::IncrementalMatchEncoder;
#[doc(inline)]
pub use longest_match_encoder::LongestMatchEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;

/// The default [`TokenEncoder`].
pub type DefaultTokenEncoder<T> = LongestMatchEncoder<T>;
