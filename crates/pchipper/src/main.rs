use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use piecechipper::{
    TokenEncoder,
    Tokenizer,
    encoders::{IncrementalMatchEncoder, LongestMatchEncoder},
};
use piecechipper_model_dirs::find_model_path;

type T = u32;

/// Encode and decode text with a `tokenizer.model` file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `tokenizer.model` file.
    ///
    /// Defaults to `$PIECECHIPPER_MODEL`, then `tokenizer.model` in the data dir.
    #[arg(long, short)]
    pub model: Option<PathBuf>,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output.
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text into token ids.
    ///
    /// With no TEXT, each stdin line is encoded separately.
    Encode {
        /// Prepend the `<s>` token.
        #[arg(long)]
        bos: bool,

        /// Append the `</s>` token.
        #[arg(long)]
        eos: bool,

        /// The segmentation strategy.
        #[arg(long, value_enum, default_value_t = EncoderKind::Longest)]
        encoder: EncoderKind,

        /// Text to encode; joined with spaces.
        text: Vec<String>,
    },

    /// Decode whitespace-separated token ids into text.
    ///
    /// With no IDS, each stdin line is decoded separately.
    Decode {
        /// Fail on ids with no piece, instead of skipping them.
        #[arg(long)]
        strict: bool,

        /// Token ids to decode.
        ids: Vec<T>,
    },

    /// Print a summary of the model.
    Info {},
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncoderKind {
    /// Probe from the longest piece length down.
    Longest,

    /// Grow a candidate over the piece prefix set.
    Incremental,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .module(module_path!())
        .module("piecechipper")
        .quiet(args.quiet)
        .verbosity(args.verbose as usize + 1)
        .init()?;
    log::debug!("{args:#?}");

    let model = find_model_path(args.model.as_ref())?;
    log::info!("loading {}", model.display());
    let tokenizer: Tokenizer<T> = Tokenizer::load_path(&model)
        .with_context(|| format!("failed to load {}", model.display()))?;

    let mut out = io::stdout().lock();
    match &args.command {
        Command::Encode {
            bos,
            eos,
            encoder,
            text,
        } => {
            let lines = if text.is_empty() {
                stdin_lines()?
            } else {
                vec![text.join(" ")]
            };
            run_encode(tokenizer, *encoder, *bos, *eos, &lines, &mut out)
        }
        Command::Decode { strict, ids } => {
            let sequences = if ids.is_empty() {
                stdin_lines()?
                    .iter()
                    .map(|line| parse_ids(line))
                    .collect::<anyhow::Result<Vec<_>>>()?
            } else {
                vec![ids.clone()]
            };
            run_decode(&tokenizer, *strict, &sequences, &mut out)
        }
        Command::Info {} => run_info(&tokenizer, &mut out),
    }
}

fn stdin_lines() -> anyhow::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read stdin")
}

fn format_tokens(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_encode<W: Write>(
    tokenizer: Tokenizer<T>,
    kind: EncoderKind,
    bos: bool,
    eos: bool,
    lines: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    let encoder: Arc<dyn TokenEncoder<T>> = match kind {
        EncoderKind::Longest => Arc::new(LongestMatchEncoder::new(tokenizer.vocab().clone())),
        EncoderKind::Incremental => {
            Arc::new(IncrementalMatchEncoder::new(tokenizer.vocab().clone()))
        }
    };
    let tokenizer = tokenizer.with_encoder(encoder);

    let batch: Vec<&str> = lines.iter().map(String::as_str).collect();
    for tokens in tokenizer.encode_batch(&batch, bos, eos)? {
        writeln!(out, "{}", format_tokens(&tokens))?;
    }
    Ok(())
}

fn parse_ids(line: &str) -> anyhow::Result<Vec<T>> {
    line.split_whitespace()
        .map(|id| {
            id.parse::<T>()
                .with_context(|| format!("invalid token id: {id:?}"))
        })
        .collect()
}

fn run_decode<W: Write>(
    tokenizer: &Tokenizer<T>,
    strict: bool,
    sequences: &[Vec<T>],
    out: &mut W,
) -> anyhow::Result<()> {
    if strict {
        for tokens in sequences {
            writeln!(out, "{}", tokenizer.try_decode(tokens)?)?;
        }
    } else {
        let batch: Vec<&[T]> = sequences.iter().map(Vec::as_slice).collect();
        for text in tokenizer.decode_batch(&batch) {
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}

fn run_info<W: Write>(
    tokenizer: &Tokenizer<T>,
    out: &mut W,
) -> anyhow::Result<()> {
    let vocab = tokenizer.vocab();
    writeln!(out, "slots: {}", vocab.slot_count())?;
    writeln!(out, "vocab size: {}", vocab.vocab_size())?;
    writeln!(out, "max piece len: {}", vocab.max_piece_len())?;
    writeln!(out, "begin id: {:?}", vocab.begin_id())?;
    writeln!(out, "end id: {:?}", vocab.end_id())?;
    writeln!(out, "unknown id: {:?}", vocab.unknown_id())?;
    writeln!(out, "byte fallback: {}", vocab.has_full_byte_fallback())?;
    Ok(())
}
