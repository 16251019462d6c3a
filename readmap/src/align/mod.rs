//! 读段比对：在参考序列上按 Hamming 距离寻找每条 read 的最佳位置

pub mod hamming;

use log::debug;

use crate::io::fastq::ReadRecord;

pub use hamming::bounded_distance;

/// 默认允许的错配比例：`floor(0.1 * L)`
pub const DEFAULT_MAX_MISMATCH_RATE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOpt {
    /// mismatches allowed per read base when `max_mismatches` is unset
    pub max_mismatch_rate: f64,
    /// fixed mismatch limit, overrides the rate
    pub max_mismatches: Option<usize>,
}

impl Default for MapOpt {
    fn default() -> Self {
        Self { max_mismatch_rate: DEFAULT_MAX_MISMATCH_RATE, max_mismatches: None }
    }
}

impl MapOpt {
    /// Largest mismatch count accepted for a read of length `read_len`.
    pub fn mismatch_limit(&self, read_len: usize) -> usize {
        self.max_mismatches
            .unwrap_or_else(|| (self.max_mismatch_rate * read_len as f64).floor() as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapHit {
    /// 0-based offset into the reference
    pub offset: usize,
    pub mismatches: usize,
    /// number of offsets sharing the minimal distance
    pub n_best: usize,
}

/// `None` means no offset is within the mismatch limit.
pub type MapResult = Option<MapHit>;

/// 对单条 read 扫描所有偏移 `[0, N-L]`，取最小 Hamming 距离，平局取最小偏移
pub fn map_read(read: &[u8], reference: &[u8], opt: MapOpt) -> MapResult {
    let l = read.len();
    let n = reference.len();
    if l == 0 || l > n {
        return None;
    }

    let limit = opt.mismatch_limit(l);
    let mut best: Option<MapHit> = None;

    for offset in 0..=n - l {
        // windows worse than the current best (or the limit) are abandoned early
        let bound = best.map_or(limit, |h| h.mismatches);
        let Some(d) = bounded_distance(read, &reference[offset..offset + l], bound) else {
            continue;
        };
        if let Some(h) = best.as_mut() {
            if d == h.mismatches {
                h.n_best += 1;
                continue;
            }
        }
        best = Some(MapHit { offset, mismatches: d, n_best: 1 });
    }

    best
}

/// Map every read in input order.
pub fn map_reads(reads: &[ReadRecord], reference: &[u8], opt: MapOpt) -> Vec<MapResult> {
    reads
        .iter()
        .map(|rec| {
            let res = map_read(&rec.seq, reference, opt);
            match res {
                Some(h) => debug!("{}: offset {} nm {} ({} best)", rec.id, h.offset, h.mismatches, h.n_best),
                None => debug!("{}: unmapped", rec.id),
            }
            res
        })
        .collect()
}
