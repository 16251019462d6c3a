use crate::io::fastq::ReadRecord;
use crate::qc::quality::SCORE_MIN;
use crate::util::dna::MASKED_BASE;

/// 超过该错误概率的碱基会被屏蔽
pub const MAX_ERROR_PROB: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskOpt {
    pub threshold: f64,
}

impl Default for MaskOpt {
    fn default() -> Self {
        Self { threshold: MAX_ERROR_PROB }
    }
}

/// `10^(-(q - 33) / 10)`
#[inline]
pub fn error_probability(score: u8) -> f64 {
    let phred = f64::from(score) - f64::from(SCORE_MIN);
    10f64.powf(-phred / 10.0)
}

/// Mask in place every base whose error probability is strictly above the threshold.
/// Returns the number of bases newly masked.
pub fn mask_read(seq: &mut [u8], qual: &[u8], opt: MaskOpt) -> usize {
    debug_assert_eq!(seq.len(), qual.len());
    let mut n = 0;
    for (base, &q) in seq.iter_mut().zip(qual) {
        if *base != MASKED_BASE && error_probability(q) > opt.threshold {
            *base = MASKED_BASE;
            n += 1;
        }
    }
    n
}

pub fn mask_collection(reads: &mut [ReadRecord], opt: MaskOpt) -> usize {
    reads.iter_mut().map(|r| mask_read(&mut r.seq, &r.qual, opt)).sum()
}
