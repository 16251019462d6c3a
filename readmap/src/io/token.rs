use std::io::BufRead;

use crate::error::{ReadmapError, Result};

/// 以空白分隔的 token 读取器，记录当前行号（从 1 开始）用于报错
pub struct TokenReader<R: BufRead> {
    reader: R,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 1 }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Skip whitespace. Returns false at end of stream.
    pub fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            let mut n = 0;
            let mut found = false;
            for &b in buf {
                if !b.is_ascii_whitespace() {
                    found = true;
                    break;
                }
                if b == b'\n' {
                    self.line += 1;
                }
                n += 1;
            }
            self.reader.consume(n);
            if found {
                return Ok(true);
            }
        }
    }

    pub fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    /// 读取下一个 token；流结束返回 `None`，超过 `cap` 字节则报错
    pub fn next_token(&mut self, cap: usize) -> Result<Option<Vec<u8>>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let line = self.line;
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.iter().position(u8::is_ascii_whitespace).unwrap_or(buf.len());
            token.extend_from_slice(&buf[..n]);
            let at_delim = n < buf.len();
            self.reader.consume(n);
            // stop early, a runaway token must not grow without bound
            if token.len() > cap {
                return Err(ReadmapError::malformed(line, format!("token longer than {} bytes", cap)));
            }
            if at_delim {
                break;
            }
        }
        Ok(Some(token))
    }

    /// Discard the rest of the current line, including its newline.
    pub fn skip_line(&mut self) -> Result<()> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    self.reader.consume(i + 1);
                    self.line += 1;
                    return Ok(());
                }
                None => {
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_any_whitespace() {
        let mut t = TokenReader::new(Cursor::new(&b"  ab\tcd\r\n\nef"[..]));
        assert_eq!(t.next_token(10).unwrap().unwrap(), b"ab");
        assert_eq!(t.next_token(10).unwrap().unwrap(), b"cd");
        assert_eq!(t.line(), 1);
        assert_eq!(t.next_token(10).unwrap().unwrap(), b"ef");
        assert_eq!(t.line(), 3);
        assert!(t.next_token(10).unwrap().is_none());
    }

    #[test]
    fn token_at_capacity_is_accepted() {
        let mut t = TokenReader::new(Cursor::new(&b"ACGT\n"[..]));
        assert_eq!(t.next_token(4).unwrap().unwrap(), b"ACGT");
    }

    #[test]
    fn token_over_capacity_is_rejected() {
        let mut t = TokenReader::new(Cursor::new(&b"\nACGTA\n"[..]));
        match t.next_token(4) {
            Err(ReadmapError::MalformedInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn token_spanning_buffer_refills() {
        let data = b"ACGTACGTACGT rest";
        let buffered = std::io::BufReader::with_capacity(3, Cursor::new(&data[..]));
        let mut t = TokenReader::new(buffered);
        assert_eq!(t.next_token(100).unwrap().unwrap(), b"ACGTACGTACGT");
        assert_eq!(t.next_token(100).unwrap().unwrap(), b"rest");
    }

    #[test]
    fn skip_line_consumes_through_newline() {
        let mut t = TokenReader::new(Cursor::new(&b"+r1 extra\nIIII"[..]));
        t.skip_line().unwrap();
        assert_eq!(t.line(), 2);
        assert_eq!(t.peek_byte().unwrap(), Some(b'I'));
    }
}
