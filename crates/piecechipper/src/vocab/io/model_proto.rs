//! # `ModelProto` Wire Messages
//!
//! The subset of the `sentencepiece_model.proto` schema needed to read the
//! piece table. All other fields are skipped as unknown fields.

/// `sentencepiece.ModelProto`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ModelProto {
    /// `repeated SentencePiece pieces = 1;`
    #[prost(message, repeated, tag = "1")]
    pub pieces: Vec<PieceProto>,
}

/// `sentencepiece.ModelProto.SentencePiece`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PieceProto {
    /// `optional string piece = 1;`
    #[prost(string, optional, tag = "1")]
    pub piece: Option<String>,

    /// `optional float score = 2;`
    #[prost(float, optional, tag = "2")]
    pub score: Option<f32>,

    /// `optional Type type = 3 [default = NORMAL];`
    ///
    /// Read as a raw `int32`; see [`crate::vocab::PieceKind::from_wire`].
    #[prost(int32, optional, tag = "3")]
    pub kind: Option<i32>,
}
