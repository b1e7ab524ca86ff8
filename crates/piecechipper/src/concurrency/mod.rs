//! # Concurrency Support
//!
//! A [`crate::PieceVocab`] is immutable once built, so encoders and decoders
//! can share one through an `Arc` across threads without locking.

pub mod rayon;
