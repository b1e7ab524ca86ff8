#![allow(missing_docs)]

use std::sync::{Arc, LazyLock};

use divan::{Bencher, black_box, counter::BytesCount};
use piecechipper::{
    PieceVocab,
    TokenDecoder,
    TokenEncoder,
    decoders::PieceDecoder,
    encoders::{IncrementalMatchEncoder, LongestMatchEncoder},
    vocab::testing::byte_fallback_test_records,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static VOCAB: LazyLock<Arc<PieceVocab<u32>>> = LazyLock::new(|| {
    Arc::new(PieceVocab::from_records(&byte_fallback_test_records()).unwrap())
});

fn english_text() -> String {
    let paragraph = "Hello, world! The hello world, the other world. \
        Hell, the world held the hello! \n";
    paragraph.repeat(200)
}

fn mixed_text() -> String {
    let paragraph = "Hello, world! été, 日本語 €12 Grüße. the été world 日本人! ";
    paragraph.repeat(200)
}

fn bench_encoder<E: TokenEncoder<u32>>(
    bencher: Bencher,
    encoder: E,
    text: String,
) {
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| encoder.try_encode(black_box(&text), true, true).unwrap());
}

mod english {
    use super::*;

    #[divan::bench]
    fn longest_match(bencher: Bencher) {
        bench_encoder(bencher, LongestMatchEncoder::new(VOCAB.clone()), english_text());
    }

    #[divan::bench]
    fn incremental_match(bencher: Bencher) {
        bench_encoder(
            bencher,
            IncrementalMatchEncoder::new(VOCAB.clone()),
            english_text(),
        );
    }
}

mod mixed {
    use super::*;

    #[divan::bench]
    fn longest_match(bencher: Bencher) {
        bench_encoder(bencher, LongestMatchEncoder::new(VOCAB.clone()), mixed_text());
    }

    #[divan::bench]
    fn incremental_match(bencher: Bencher) {
        bench_encoder(
            bencher,
            IncrementalMatchEncoder::new(VOCAB.clone()),
            mixed_text(),
        );
    }
}

#[divan::bench]
fn decode(bencher: Bencher) {
    let text = mixed_text();
    let tokens = LongestMatchEncoder::new(VOCAB.clone())
        .try_encode(&text, true, true)
        .unwrap();
    let decoder = PieceDecoder::new(VOCAB.clone());

    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| decoder.decode(black_box(&tokens)));
}
