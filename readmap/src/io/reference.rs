use std::io::BufRead;

use crate::error::{ReadmapError, Result};
use crate::io::token::TokenReader;

pub const MAX_REF_LENGTH: usize = 1000;

/// 读取参考序列：读完 reads 之后流中的下一个 token
pub fn read_reference<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Vec<u8>> {
    tokens
        .next_token(MAX_REF_LENGTH)?
        .ok_or_else(|| ReadmapError::malformed(tokens.line(), "missing reference sequence"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_single_token() {
        let mut t = TokenReader::new(Cursor::new(&b"\nACGTNacgt\n"[..]));
        // taken verbatim, no case folding
        assert_eq!(read_reference(&mut t).unwrap(), b"ACGTNacgt");
    }

    #[test]
    fn missing_reference_is_malformed() {
        let mut t = TokenReader::new(Cursor::new(&b"  \n"[..]));
        assert!(matches!(read_reference(&mut t), Err(ReadmapError::MalformedInput { .. })));
    }

    #[test]
    fn reference_over_capacity_is_rejected() {
        let data = vec![b'A'; MAX_REF_LENGTH + 1];
        let mut t = TokenReader::new(Cursor::new(data));
        assert!(matches!(read_reference(&mut t), Err(ReadmapError::MalformedInput { .. })));

        let data = vec![b'A'; MAX_REF_LENGTH];
        let mut t = TokenReader::new(Cursor::new(data));
        assert_eq!(read_reference(&mut t).unwrap().len(), MAX_REF_LENGTH);
    }
}
