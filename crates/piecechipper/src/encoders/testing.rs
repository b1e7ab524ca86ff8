//! # Shared Encoder Tests

use std::sync::Arc;

use crate::{
    decoders::{PieceDecoder, TokenDecoder},
    encoders::TokenEncoder,
    errors::PCError,
    types::TokenType,
    vocab::{
        PieceVocab,
        testing::{
            BYTE_FALLBACK_FIRST_BYTE_ID,
            BYTE_FALLBACK_TEST_PIECES,
            byte_fallback_test_records,
            hello_world_test_records,
            unknown_fallback_test_records,
        },
    },
};

/// Convert fixture ids to tokens.
pub fn ids<T: TokenType>(ids: &[usize]) -> Vec<T> {
    ids.iter()
        .map(|&id| T::from_usize(id).unwrap())
        .collect()
}

/// The fixture id of a normal piece in [`byte_fallback_test_records`].
pub fn piece_id(piece: &str) -> usize {
    let idx = BYTE_FALLBACK_TEST_PIECES
        .iter()
        .position(|&p| p == piece)
        .unwrap_or_else(|| panic!("no fixture piece {piece:?}"));
    BYTE_FALLBACK_FIRST_BYTE_ID + 256 + idx
}

/// The fixture id of a byte piece in [`byte_fallback_test_records`].
pub fn byte_id(byte: u8) -> usize {
    BYTE_FALLBACK_FIRST_BYTE_ID + byte as usize
}

/// Run the shared encoder suite against an encoder constructor.
pub fn common_encoder_tests<T, E, F>(build: F)
where
    T: TokenType,
    E: TokenEncoder<T>,
    F: Fn(Arc<PieceVocab<T>>) -> E,
{
    hello_world_tests(&build);
    byte_fallback_tests(&build);
    unknown_fallback_tests(&build);
}

fn hello_world_tests<T, E, F>(build: &F)
where
    T: TokenType,
    E: TokenEncoder<T>,
    F: Fn(Arc<PieceVocab<T>>) -> E,
{
    let vocab: Arc<PieceVocab<T>> =
        Arc::new(PieceVocab::from_records(&hello_world_test_records()).unwrap());
    let encoder = build(vocab.clone());
    let decoder = PieceDecoder::new(vocab.clone());

    // No leading space, so no "▁Hello"; and no fallback to catch 'H'.
    assert!(matches!(
        encoder.try_encode("Hello, world!", true, true),
        Err(PCError::UnknownToken {
            ch: 'H',
            position: 0
        })
    ));

    let text = " Hello, world!";
    assert_eq!(
        encoder.try_encode(text, true, true).unwrap(),
        ids::<T>(&[1, 10, 11, 12, 13, 2])
    );
    let tokens = encoder.try_encode(text, false, false).unwrap();
    assert_eq!(tokens, ids::<T>(&[10, 11, 12, 13]));
    assert_eq!(decoder.decode(&tokens), text);

    assert_eq!(encoder.try_encode("", true, true).unwrap(), ids::<T>(&[1, 2]));
    assert_eq!(encoder.try_encode("", false, true).unwrap(), ids::<T>(&[2]));
    assert!(encoder.try_encode("", false, false).unwrap().is_empty());

    assert!(matches!(
        encoder.try_encode(" world, Hello!x", false, false),
        Err(PCError::UnknownToken {
            ch: 'x',
            position: 14
        })
    ));

    // Failed appends leave the buffer as it was.
    let mut tokens = ids::<T>(&[99]);
    assert!(
        encoder
            .try_encode_append(" Hello?", true, true, &mut tokens)
            .is_err()
    );
    assert_eq!(tokens, ids::<T>(&[99]));

    // A failed call does not poison the encoder.
    assert_eq!(
        encoder.try_encode(" world!", false, false).unwrap(),
        ids::<T>(&[12, 13])
    );

    assert_eq!(
        encoder
            .try_encode_batch(&[" Hello", " world!"], false, true)
            .unwrap(),
        vec![ids::<T>(&[10, 2]), ids::<T>(&[12, 13, 2])]
    );
    assert!(
        encoder
            .try_encode_batch(&[" Hello", "nope"], false, false)
            .is_err()
    );
}

fn byte_fallback_tests<T, E, F>(build: &F)
where
    T: TokenType,
    E: TokenEncoder<T>,
    F: Fn(Arc<PieceVocab<T>>) -> E,
{
    let vocab: Arc<PieceVocab<T>> =
        Arc::new(PieceVocab::from_records(&byte_fallback_test_records()).unwrap());
    let encoder = build(vocab.clone());
    let decoder = PieceDecoder::new(vocab.clone());

    // Greedy: "Hell" beats "He", then "o".
    assert_eq!(
        encoder.try_encode("Hello, world!", true, true).unwrap(),
        ids::<T>(&[
            1,
            piece_id("Hell"),
            piece_id("o"),
            piece_id(","),
            piece_id("▁world"),
            piece_id("!"),
            2,
        ])
    );

    assert_eq!(
        encoder.try_encode(" hello world", false, false).unwrap(),
        ids::<T>(&[piece_id("▁hello"), piece_id("▁world")])
    );
    assert_eq!(
        encoder.try_encode(" th", false, false).unwrap(),
        ids::<T>(&[piece_id("▁t"), byte_id(b'h')])
    );
    assert_eq!(
        encoder.try_encode(" the", false, false).unwrap(),
        ids::<T>(&[piece_id("▁the")])
    );

    // Multi-byte characters fall back to their UTF-8 bytes, in order.
    assert_eq!(
        encoder.try_encode("€", false, false).unwrap(),
        ids::<T>(&[byte_id(0xE2), byte_id(0x82), byte_id(0xAC)])
    );
    assert_eq!(
        encoder.try_encode("日本語", false, false).unwrap(),
        ids::<T>(&[piece_id("日本"), piece_id("語")])
    );
    assert_eq!(
        encoder.try_encode("日本人", false, false).unwrap(),
        ids::<T>(&[piece_id("日本"), byte_id(0xE4), byte_id(0xBA), byte_id(0xBA)])
    );
    assert_eq!(
        encoder.try_encode(" été", false, false).unwrap(),
        ids::<T>(&[piece_id("▁été")])
    );
    assert_eq!(
        encoder.try_encode("étéx", false, false).unwrap(),
        ids::<T>(&[piece_id("été"), byte_id(b'x')])
    );

    // The unknown literal is still a directly matchable piece.
    assert_eq!(
        encoder.try_encode("<unk>", false, false).unwrap(),
        ids::<T>(&[0])
    );

    for text in [
        "Hello, world!",
        " hello   world ",
        "Grüße, 世界! 🦀\n\tend",
        "été € 日本語",
        "",
    ] {
        let tokens = encoder.try_encode(text, true, true).unwrap();
        assert_eq!(tokens.first(), vocab.begin_id().as_ref());
        assert_eq!(tokens.last(), vocab.end_id().as_ref());
        assert_eq!(decoder.decode(&tokens), text);
    }
}

fn unknown_fallback_tests<T, E, F>(build: &F)
where
    T: TokenType,
    E: TokenEncoder<T>,
    F: Fn(Arc<PieceVocab<T>>) -> E,
{
    let vocab: Arc<PieceVocab<T>> =
        Arc::new(PieceVocab::from_records(&unknown_fallback_test_records()).unwrap());
    let encoder = build(vocab.clone());
    let decoder = PieceDecoder::new(vocab.clone());

    assert_eq!(
        encoder.try_encode("Hello, world!", false, false).unwrap(),
        ids::<T>(&[
            piece_id("Hell"),
            piece_id("o"),
            piece_id(","),
            piece_id("▁world"),
            piece_id("!"),
        ])
    );

    // One unknown per unmatched character, whatever its UTF-8 width.
    assert_eq!(encoder.try_encode("€x", false, false).unwrap(), ids::<T>(&[0, 0]));

    let tokens = encoder.try_encode(" th", true, true).unwrap();
    assert_eq!(tokens, ids::<T>(&[1, piece_id("▁t"), 0, 2]));
    assert_eq!(decoder.decode(&tokens), " t<unk>");
}
