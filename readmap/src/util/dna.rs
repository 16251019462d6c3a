/// 屏蔽后的碱基占位符
pub const MASKED_BASE: u8 = b'*';

#[inline]
pub fn is_canonical(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// 参考序列的碱基组成。`len` 统计所有字符，四个计数只统计大写 A/C/G/T。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub len: usize,
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    pub fn canonical(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Characters counted in `len` but in none of the four bases.
    pub fn other(&self) -> usize {
        self.len - self.canonical()
    }

    pub fn gc_fraction(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.g + self.c) as f64 / self.len as f64
    }
}

pub fn summarize(seq: &[u8]) -> BaseCounts {
    let mut counts = BaseCounts { len: seq.len(), ..BaseCounts::default() };
    for &b in seq {
        match b {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            _ => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_canonical_only() {
        let c = summarize(b"ACGTACGT");
        assert_eq!(c, BaseCounts { len: 8, a: 2, c: 2, g: 2, t: 2 });
        assert_eq!(c.other(), 0);
        assert!((c.gc_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn summarize_counts_other_chars_in_length_only() {
        // case-sensitive, ambiguity codes ignored
        let c = summarize(b"AaNnT*");
        assert_eq!(c, BaseCounts { len: 6, a: 1, c: 0, g: 0, t: 1 });
        assert_eq!(c.other(), 4);
    }

    #[test]
    fn summarize_empty() {
        let c = summarize(b"");
        assert_eq!(c, BaseCounts::default());
        assert_eq!(c.gc_fraction(), 0.0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: base counts never exceed length, equal iff all canonical
            #[test]
            fn prop_counts_bounded_by_length(seq in "[ACGTNacgt*]{0,200}") {
                let c = summarize(seq.as_bytes());
                prop_assert!(c.canonical() <= c.len);
                prop_assert_eq!(c.canonical() == c.len, seq.bytes().all(is_canonical));
            }
        }
    }
}
