use std::io::BufRead;

use crate::error::{ReadmapError, Result};
use crate::io::token::TokenReader;
use crate::qc::quality;
use crate::util::dna;

pub const MAX_READ_ID_LENGTH: usize = 100;
pub const MAX_READ_LENGTH: usize = 100;

const HEADER_MARKER: u8 = b'@';
const END_MARKER: u8 = b'#';
const SEPARATOR_MARKER: u8 = b'+';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// 读取一条记录的结果：一条 read，或遇到 `#` 开头的终止标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    Read(ReadRecord),
    EndOfReads,
}

pub struct FastqReader<R: BufRead> {
    tokens: TokenReader<R>,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { tokens: TokenReader::new(reader) }
    }

    /// The underlying tokenizer; the reference sequence follows the reads in the same stream.
    pub fn tokens_mut(&mut self) -> &mut TokenReader<R> {
        &mut self.tokens
    }

    pub fn read_record(&mut self) -> Result<RecordEvent> {
        // header token: '@id' or the '#' terminator
        let header = self.tokens.next_token(MAX_READ_ID_LENGTH)?.ok_or_else(|| {
            ReadmapError::malformed(
                self.tokens.line(),
                "unexpected end of input, expected '@' record or '#' terminator",
            )
        })?;
        match header.first() {
            Some(&END_MARKER) => return Ok(RecordEvent::EndOfReads),
            Some(&HEADER_MARKER) => {}
            _ => {
                return Err(ReadmapError::malformed(
                    self.tokens.line(),
                    format!("record header '{}' not starting with '@' or '#'", String::from_utf8_lossy(&header)),
                ))
            }
        }
        let id = String::from_utf8_lossy(&header[1..]).into_owned();

        let seq = self
            .tokens
            .next_token(MAX_READ_LENGTH)?
            .ok_or_else(|| ReadmapError::malformed(self.tokens.line(), "unexpected EOF after header"))?;
        if let Some(&bad) = seq.iter().find(|&&b| !dna::is_canonical(b)) {
            return Err(ReadmapError::malformed(
                self.tokens.line(),
                format!("base '{}' not one of A, C, G, T", bad as char),
            ));
        }

        // separator line: '+' optionally followed by anything
        if !self.tokens.skip_whitespace()? || self.tokens.peek_byte()? != Some(SEPARATOR_MARKER) {
            return Err(ReadmapError::malformed(self.tokens.line(), "missing '+' line"));
        }
        self.tokens.skip_line()?;

        let qual = self
            .tokens
            .next_token(MAX_READ_LENGTH)?
            .ok_or_else(|| ReadmapError::malformed(self.tokens.line(), "missing quality line"))?;
        if let Some(&bad) = qual.iter().find(|&&q| !quality::is_valid_score(q)) {
            return Err(ReadmapError::malformed(
                self.tokens.line(),
                format!(
                    "quality character '{}' outside [{}, {}]",
                    bad as char,
                    quality::SCORE_MIN,
                    quality::SCORE_MAX
                ),
            ));
        }
        if qual.len() != seq.len() {
            return Err(ReadmapError::malformed(
                self.tokens.line(),
                format!("seq/qual length mismatch ({} vs {})", seq.len(), qual.len()),
            ));
        }

        Ok(RecordEvent::Read(ReadRecord { id, seq, qual }))
    }
}
