//! 质量分析与低质量碱基屏蔽

pub mod mask;
pub mod quality;

pub use mask::{error_probability, mask_collection, mask_read, MaskOpt, MAX_ERROR_PROB};
pub use quality::{
    average_quality, index_of_min_quality, index_of_smallest_average, SCORE_MAX, SCORE_MIN,
};
