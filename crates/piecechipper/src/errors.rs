//! # Error Types

/// Errors raised by `piecechipper`.
#[derive(Debug, thiserror::Error)]
pub enum PCError {
    /// The vocabulary buffer could not be turned into a piece table.
    #[error("malformed vocabulary: {reason}")]
    MalformedVocabulary {
        /// What was wrong with the buffer.
        reason: String,
    },

    /// A character matched no piece, no byte fallback, and no unknown token.
    #[error("unknown token: no piece matches {ch:?} at character {position}")]
    UnknownToken {
        /// The unmatched character.
        ch: char,

        /// Character index of `ch` in the input text.
        position: usize,
    },

    /// A token id has no piece in the vocabulary.
    #[error("invalid token id: {id}")]
    InvalidTokenId {
        /// The offending id.
        id: u64,
    },

    /// IO failure while reading a vocabulary.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PCError {
    /// Build a [`PCError::MalformedVocabulary`].
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedVocabulary {
            reason: reason.into(),
        }
    }
}

impl From<prost::DecodeError> for PCError {
    fn from(err: prost::DecodeError) -> Self {
        Self::malformed(err.to_string())
    }
}

/// Result alias for `piecechipper` operations.
pub type PCResult<T> = Result<T, PCError>;
