use crate::util::dna::MASKED_BASE;

/// 屏蔽碱基视为通配符，与任何参考碱基匹配且不计罚分
#[inline]
pub fn base_matches(read_base: u8, ref_base: u8) -> bool {
    read_base == MASKED_BASE || read_base == ref_base
}

/// Hamming distance between a read and an equal-length reference window,
/// giving up as soon as the count exceeds `bound` (`None` in that case).
pub fn bounded_distance(read: &[u8], window: &[u8], bound: usize) -> Option<usize> {
    debug_assert_eq!(read.len(), window.len());
    let mut d = 0usize;
    for (&q, &r) in read.iter().zip(window) {
        if !base_matches(q, r) {
            d += 1;
            if d > bound {
                return None;
            }
        }
    }
    Some(d)
}
