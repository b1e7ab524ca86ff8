#![warn(missing_docs, unused)]
//! # `piecechipper` Piece Tokenizer
//!
//! `piecechipper` loads `SentencePiece`-style piece tables (`tokenizer.model`
//! protobuf files, as shipped with `llama` family models) and converts between
//! text and token ids with a greedy longest-match segmentation.
//!
//! See:
//! * [`vocab`] to load and inspect a [`vocab::PieceVocab`].
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`Tokenizer`] for a bundled encoder/decoder pair.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Loading A Model
//!
//! ```rust,no_run
//! use piecechipper::{PCResult, Tokenizer};
//!
//! fn example() -> PCResult<()> {
//!     let tokenizer: Tokenizer<u32> = Tokenizer::load_path("tokenizer.model")?;
//!
//!     let tokens = tokenizer.encode("Hello, world!", true, true)?;
//!     let text = tokenizer.decode(&tokens);
//!     assert_eq!(text, "Hello, world!");
//!
//!     Ok(())
//! }
//! ```

pub mod decoders;
pub mod encoders;
pub mod normalization;
pub mod types;
pub mod vocab;

#[cfg(feature = "rayon")]
pub mod concurrency;

mod errors;
mod tokenizer;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{PCError, PCResult};
#[doc(inline)]
pub use tokenizer::Tokenizer;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::PieceVocab;
