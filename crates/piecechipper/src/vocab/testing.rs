//! # Test Vocabularies
//!
//! Small fixture vocabularies; enabled for downstream users by the `testing` feature.

use crate::vocab::PieceRecord;

/// A vocabulary with no byte pieces and no unknown piece.
///
/// * `1` - `<s>`
/// * `2` - `</s>`
/// * `10` - `▁Hello`
/// * `11` - `,`
/// * `12` - `▁world`
/// * `13` - `!`
///
/// Ids `0` and `3..=9` are unrecognized control pieces.
pub fn hello_world_test_records() -> Vec<PieceRecord> {
    let mut records = vec![
        PieceRecord::control("<pad>"),
        PieceRecord::control("<s>"),
        PieceRecord::control("</s>"),
    ];
    records.extend((3..10).map(|i| PieceRecord::control(format!("<ctl{i}>"))));
    records.extend(
        ["▁Hello", ",", "▁world", "!"]
            .into_iter()
            .map(PieceRecord::normal),
    );
    records
}

/// The id of the first byte piece in [`byte_fallback_test_records`].
pub const BYTE_FALLBACK_FIRST_BYTE_ID: usize = 3;

/// Normal pieces of [`byte_fallback_test_records`], in id order.
pub const BYTE_FALLBACK_TEST_PIECES: &[&str] = &[
    "▁Hello", ",", "▁world", "!", "▁", "He", "Hell", "llo", "o", "▁the", "▁t",
    "he", "▁hello", "ll", "wor", "ld", "▁w", "é", "été", "▁été", "日本", "語",
];

/// A `llama`-shaped vocabulary with full byte fallback.
///
/// * `0` - `<unk>` (unknown)
/// * `1` - `<s>`
/// * `2` - `</s>`
/// * `3..=258` - `<0x00>` through `<0xFF>`
/// * `259..` - [`BYTE_FALLBACK_TEST_PIECES`]
pub fn byte_fallback_test_records() -> Vec<PieceRecord> {
    let mut records = vec![
        PieceRecord::unknown("<unk>"),
        PieceRecord::control("<s>"),
        PieceRecord::control("</s>"),
    ];
    records.extend((0..=255u8).map(PieceRecord::byte));
    records.extend(
        BYTE_FALLBACK_TEST_PIECES
            .iter()
            .enumerate()
            .map(|(i, &piece)| PieceRecord::normal(piece).with_score(-(i as f32))),
    );
    records
}

/// [`byte_fallback_test_records`] with the byte pieces replaced by an unknown-only fallback.
///
/// Ids are the same as in [`byte_fallback_test_records`]; the byte slots
/// hold unrecognized control pieces.
pub fn unknown_fallback_test_records() -> Vec<PieceRecord> {
    byte_fallback_test_records()
        .into_iter()
        .enumerate()
        .map(|(id, record)| match record.kind {
            crate::vocab::PieceKind::Byte => PieceRecord::control(format!("<unused{id}>")),
            _ => record,
        })
        .collect()
}
