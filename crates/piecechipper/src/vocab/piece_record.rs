//! # Piece Records

use crate::errors::{PCError, PCResult};

/// The kind of a vocabulary entry.
///
/// The set is fixed by the model file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// A regular text piece.
    Normal,

    /// A control piece; `<s>` and `</s>` are recognized, others are ignored.
    Control,

    /// A raw byte piece, spelled `<0xHH>`.
    Byte,

    /// The unknown-token piece.
    Unknown,
}

impl PieceKind {
    /// Wire value of `NORMAL`; also the value of an absent type field.
    pub const WIRE_NORMAL: i32 = 1;
    /// Wire value of `UNKNOWN`.
    pub const WIRE_UNKNOWN: i32 = 2;
    /// Wire value of `CONTROL`.
    pub const WIRE_CONTROL: i32 = 3;
    /// Wire value of `USER_DEFINED`; such records are skipped.
    pub const WIRE_USER_DEFINED: i32 = 4;
    /// Wire value of `UNUSED`; such records are skipped.
    pub const WIRE_UNUSED: i32 = 5;
    /// Wire value of `BYTE`.
    pub const WIRE_BYTE: i32 = 6;

    /// Map a wire type value to a kind.
    ///
    /// ## Returns
    /// * `Ok(Some(kind))` for the four table kinds,
    /// * `Ok(None)` for `USER_DEFINED` and `UNUSED`, which hold an id but no table entry,
    /// * `Err(MalformedVocabulary)` for anything else.
    pub fn from_wire(value: i32) -> PCResult<Option<Self>> {
        match value {
            Self::WIRE_NORMAL => Ok(Some(Self::Normal)),
            Self::WIRE_UNKNOWN => Ok(Some(Self::Unknown)),
            Self::WIRE_CONTROL => Ok(Some(Self::Control)),
            Self::WIRE_BYTE => Ok(Some(Self::Byte)),
            Self::WIRE_USER_DEFINED | Self::WIRE_UNUSED => Ok(None),
            other => Err(PCError::malformed(format!("unrecognized piece type {other}"))),
        }
    }

    /// The wire type value for this kind.
    pub fn to_wire(self) -> i32 {
        match self {
            Self::Normal => Self::WIRE_NORMAL,
            Self::Control => Self::WIRE_CONTROL,
            Self::Byte => Self::WIRE_BYTE,
            Self::Unknown => Self::WIRE_UNKNOWN,
        }
    }
}

/// One vocabulary entry, as read from a model file.
///
/// The id of a record is its index in the record list.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceRecord {
    /// The literal piece text; `<0xHH>` for [`PieceKind::Byte`].
    pub text: String,

    /// The entry kind.
    pub kind: PieceKind,

    /// The model score; carried through, unused by segmentation.
    pub score: f32,
}

impl PieceRecord {
    /// Build a record with a zero score.
    pub fn new<S: Into<String>>(
        text: S,
        kind: PieceKind,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            score: 0.0,
        }
    }

    /// Set the score.
    pub fn with_score(
        self,
        score: f32,
    ) -> Self {
        Self { score, ..self }
    }

    /// Build a [`PieceKind::Normal`] record.
    pub fn normal<S: Into<String>>(text: S) -> Self {
        Self::new(text, PieceKind::Normal)
    }

    /// Build a [`PieceKind::Control`] record.
    pub fn control<S: Into<String>>(text: S) -> Self {
        Self::new(text, PieceKind::Control)
    }

    /// Build a [`PieceKind::Unknown`] record.
    pub fn unknown<S: Into<String>>(text: S) -> Self {
        Self::new(text, PieceKind::Unknown)
    }

    /// Build a [`PieceKind::Byte`] record for `byte`.
    pub fn byte(byte: u8) -> Self {
        Self::new(super::format_byte_piece(byte), PieceKind::Byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_kinds() {
        for kind in [
            PieceKind::Normal,
            PieceKind::Control,
            PieceKind::Byte,
            PieceKind::Unknown,
        ] {
            assert_eq!(PieceKind::from_wire(kind.to_wire()).unwrap(), Some(kind));
        }

        assert_eq!(PieceKind::from_wire(4).unwrap(), None);
        assert_eq!(PieceKind::from_wire(5).unwrap(), None);
        assert!(matches!(
            PieceKind::from_wire(9),
            Err(PCError::MalformedVocabulary { .. })
        ));
        assert!(PieceKind::from_wire(0).is_err());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            PieceRecord::byte(0x0A),
            PieceRecord {
                text: "<0x0A>".to_string(),
                kind: PieceKind::Byte,
                score: 0.0,
            }
        );
        assert_eq!(PieceRecord::normal("▁the").with_score(-3.5).score, -3.5);
        assert_eq!(PieceRecord::control("<s>").kind, PieceKind::Control);
        assert_eq!(PieceRecord::unknown("<unk>").kind, PieceKind::Unknown);
    }
}
