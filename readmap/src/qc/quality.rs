use crate::error::{ReadmapError, Result};

/// 有效质量字符范围（Phred+33，`!`..=`I`）
pub const SCORE_MIN: u8 = 33;
pub const SCORE_MAX: u8 = 73;

#[inline]
pub fn is_valid_score(q: u8) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&q)
}

/// Index of the lowest quality character. The first occurrence wins on ties.
pub fn index_of_min_quality(scores: &[u8]) -> Result<usize> {
    scores
        .iter()
        .enumerate()
        .min_by_key(|&(_, &q)| q)
        .map(|(i, _)| i)
        .ok_or(ReadmapError::EmptyInput("quality scores"))
}

/// 质量字符原始 ASCII 值的算术平均（不转换为错误概率）
pub fn average_quality(scores: &[u8]) -> Result<f64> {
    if scores.is_empty() {
        return Err(ReadmapError::EmptyInput("quality scores"));
    }
    let sum: u64 = scores.iter().map(|&q| u64::from(q)).sum();
    Ok(sum as f64 / scores.len() as f64)
}

/// Index of the read whose average quality is smallest, earliest index on ties.
pub fn index_of_smallest_average<'a, I>(collection: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, scores) in collection.into_iter().enumerate() {
        let avg = average_quality(scores)?;
        match best {
            Some((_, b)) if avg >= b => {}
            _ => best = Some((i, avg)),
        }
    }
    best.map(|(i, _)| i).ok_or(ReadmapError::EmptyInput("read collection"))
}
