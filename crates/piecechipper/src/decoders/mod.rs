//! # Token Decoders
//!
//! Decoding concatenates piece bytes, drops the begin/end control ids,
//! renders the unknown id as `<unk>`, and turns word-boundary markers back
//! into spaces.
//!
//! Ids with no piece are governed by [`InvalidTokenPolicy`]:
//! [`TokenDecoder::decode`] skips them, [`TokenDecoder::try_decode`] reports
//! [`crate::PCError::InvalidTokenId`].

mod piece_decoder;
mod token_decoder;

#[doc(inline)]
pub use piece_decoder::PieceDecoder;
#[doc(inline)]
pub use token_decoder::{InvalidTokenPolicy, TokenDecoder};

/// The default [`TokenDecoder`].
pub type DefaultTokenDecoder<T> = PieceDecoder<T>;
