//! # Piece Vocabulary

use crate::{
    errors::{PCError, PCResult},
    types::{PCHashMap, TokenType},
    vocab::{PieceKind, PieceRecord, parse_byte_piece},
};

/// Control piece text marking the start of a sequence.
pub const BEGIN_PIECE: &str = "<s>";

/// Control piece text marking the end of a sequence.
pub const END_PIECE: &str = "</s>";

/// Text rendered by decoders for the unknown token.
pub const UNKNOWN_PLACEHOLDER: &str = "<unk>";

/// An immutable `{ piece <-> id }` table.
///
/// Pieces are stored as bytes; byte pieces (`<0xHH>`) are stored as the
/// single raw byte they name.
///
/// Built once, via [`PieceVocab::from_records`] or [`PieceVocabBuilder`],
/// and shared read-only (typically behind an `Arc`) afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceVocab<T: TokenType> {
    piece_to_id: PCHashMap<Vec<u8>, T>,
    id_to_piece: PCHashMap<T, Vec<u8>>,
    byte_ids: [Option<T>; 256],
    begin_id: Option<T>,
    end_id: Option<T>,
    unknown_id: Option<T>,
    max_piece_len: usize,
    slot_count: usize,
}

impl<T: TokenType> PieceVocab<T> {
    /// Build a vocabulary from an ordered list of records.
    ///
    /// The id of each record is its index.
    ///
    /// ## Arguments
    /// * `records` - the piece records, in id order.
    ///
    /// ## Returns
    /// The table, or [`PCError::MalformedVocabulary`] on an invalid byte piece
    /// or an id that does not fit `T`.
    pub fn from_records<'a, I>(records: I) -> PCResult<Self>
    where
        I: IntoIterator<Item = &'a PieceRecord>,
    {
        let mut builder = PieceVocabBuilder::new();
        for record in records {
            builder.push(record)?;
        }
        Ok(builder.build())
    }

    /// Look up the id of an exact piece.
    pub fn lookup_token(
        &self,
        piece: &[u8],
    ) -> Option<T> {
        self.piece_to_id.get(piece).copied()
    }

    /// Look up the piece bytes of an id.
    ///
    /// Control ids and unmapped ids have no piece.
    pub fn lookup_piece(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.id_to_piece.get(&token).map(Vec::as_slice)
    }

    /// Look up the byte-fallback id for a raw byte.
    pub fn byte_token(
        &self,
        byte: u8,
    ) -> Option<T> {
        self.byte_ids[byte as usize]
    }

    /// Does every one of the 256 bytes have a byte piece?
    pub fn has_full_byte_fallback(&self) -> bool {
        self.byte_ids.iter().all(Option::is_some)
    }

    /// The `<s>` id, if present.
    pub fn begin_id(&self) -> Option<T> {
        self.begin_id
    }

    /// The `</s>` id, if present.
    pub fn end_id(&self) -> Option<T> {
        self.end_id
    }

    /// The unknown-token id, if present.
    pub fn unknown_id(&self) -> Option<T> {
        self.unknown_id
    }

    /// Is `token` the begin or end id?
    pub fn is_control(
        &self,
        token: T,
    ) -> bool {
        Some(token) == self.begin_id || Some(token) == self.end_id
    }

    /// The longest piece, in bytes.
    pub fn max_piece_len(&self) -> usize {
        self.max_piece_len
    }

    /// The number of addressable tokens.
    ///
    /// Counts every normal, byte, and unknown id, plus one for each of
    /// the begin and end ids when present.
    pub fn vocab_size(&self) -> usize {
        self.id_to_piece.len()
            + usize::from(self.begin_id.is_some())
            + usize::from(self.end_id.is_some())
    }

    /// The number of records the table was built from.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Iterate over the `(piece, id)` pairs, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = (&[u8], T)> + '_ {
        self.piece_to_id
            .iter()
            .map(|(piece, &token)| (piece.as_slice(), token))
    }

    /// Append the fallback tokens for the unmatched character at `offset`.
    ///
    /// Tries, in order:
    /// 1. one byte piece per UTF-8 byte, if all of them exist;
    /// 2. the unknown token;
    ///
    /// and fails with [`PCError::UnknownToken`] otherwise.
    ///
    /// ## Arguments
    /// * `text` - the normalized text being encoded.
    /// * `offset` - byte offset of a character boundary in `text`.
    /// * `tokens` - the target token buffer.
    ///
    /// ## Returns
    /// The byte length of the consumed character.
    pub fn append_fallback_tokens(
        &self,
        text: &str,
        offset: usize,
        tokens: &mut Vec<T>,
    ) -> PCResult<usize> {
        let Some(ch) = text[offset..].chars().next() else {
            return Ok(0);
        };
        let mut buf = [0u8; 4];
        let bytes = ch.encode_utf8(&mut buf).as_bytes();

        if bytes.iter().all(|&b| self.byte_ids[b as usize].is_some()) {
            tokens.extend(bytes.iter().filter_map(|&b| self.byte_ids[b as usize]));
        } else if let Some(unknown_id) = self.unknown_id {
            tokens.push(unknown_id);
        } else {
            return Err(PCError::UnknownToken {
                ch,
                position: text[..offset].chars().count(),
            });
        }
        Ok(bytes.len())
    }
}

/// Incremental builder for [`PieceVocab`].
///
/// Each pushed record, and each skipped slot, consumes the next id.
#[derive(Debug, Clone)]
pub struct PieceVocabBuilder<T: TokenType> {
    vocab: PieceVocab<T>,
}

impl<T: TokenType> Default for PieceVocabBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> PieceVocabBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vocab: PieceVocab {
                piece_to_id: PCHashMap::default(),
                id_to_piece: PCHashMap::default(),
                byte_ids: [None; 256],
                begin_id: None,
                end_id: None,
                unknown_id: None,
                max_piece_len: 0,
                slot_count: 0,
            },
        }
    }

    fn next_id(&mut self) -> PCResult<T> {
        let idx = self.vocab.slot_count;
        let id = T::from_usize(idx)
            .ok_or_else(|| PCError::malformed(format!("piece index {idx} overflows token type")))?;
        self.vocab.slot_count += 1;
        Ok(id)
    }

    /// Consume an id without creating a table entry.
    pub fn skip(&mut self) -> PCResult<T> {
        self.next_id()
    }

    /// Add a record under the next id.
    ///
    /// ## Returns
    /// The id assigned to the record.
    pub fn push(
        &mut self,
        record: &PieceRecord,
    ) -> PCResult<T> {
        let id = self.next_id()?;
        match record.kind {
            PieceKind::Control => match record.text.as_str() {
                BEGIN_PIECE => self.vocab.begin_id = Some(id),
                END_PIECE => self.vocab.end_id = Some(id),
                _ => (),
            },
            PieceKind::Normal => self.insert(id, record.text.as_bytes().to_vec()),
            PieceKind::Byte => {
                let byte = parse_byte_piece(&record.text)?;
                self.vocab.byte_ids[byte as usize] = Some(id);
                self.insert(id, vec![byte]);
            }
            PieceKind::Unknown => {
                self.vocab.unknown_id = Some(id);
                self.insert(id, record.text.as_bytes().to_vec());
            }
        }
        Ok(id)
    }

    fn insert(
        &mut self,
        id: T,
        piece: Vec<u8>,
    ) {
        let vocab = &mut self.vocab;
        vocab.max_piece_len = vocab.max_piece_len.max(piece.len());
        if let Some(prev) = vocab.piece_to_id.insert(piece.clone(), id) {
            log::warn!(
                "piece {:?} is shared by ids {prev:?} and {id:?}; keeping {id:?}",
                String::from_utf8_lossy(&piece),
            );
        }
        vocab.id_to_piece.insert(id, piece);
    }

    /// Finish the table.
    pub fn build(self) -> PieceVocab<T> {
        let vocab = self.vocab;
        log::debug!(
            "built piece vocab: slots={}, pieces={}, max_piece_len={}, begin={:?}, end={:?}, unknown={:?}, byte_fallback={}",
            vocab.slot_count,
            vocab.id_to_piece.len(),
            vocab.max_piece_len,
            vocab.begin_id,
            vocab.end_id,
            vocab.unknown_id,
            vocab.byte_ids.iter().filter(|b| b.is_some()).count(),
        );
        vocab
    }
}
