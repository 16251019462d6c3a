//! # readmap
//!
//! 小规模 FASTQ reads 的分阶段处理与比对。
//!
//! 输入为一段文本流：若干条四行格式的 read 记录，以 `#` 开头的标识行结束，
//! 随后是一条参考序列。处理分五个阶段：
//!
//! 1. 找出第一条 read 中质量最低的碱基
//! 2. 统计所有 reads，找出平均质量最低的 read
//! 3. 将错误概率超过阈值的碱基屏蔽为 `*`
//! 4. 统计参考序列的长度与碱基组成
//! 5. 按 Hamming 距离（`*` 为通配符）将每条 read 比对到参考序列
//!
//! ## 快速示例
//!
//! ```rust
//! use readmap::pipeline::{self, PipelineOpt};
//!
//! let input = b"@r1\nACGT\n+\nIIII\n#end\nACGTACGT\n";
//! let mut out = Vec::new();
//! let ctx = pipeline::run(&input[..], &mut out, PipelineOpt::default()).unwrap();
//!
//! let hit = ctx.mappings[0].unwrap();
//! assert_eq!((hit.offset, hit.mismatches), (0, 0));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — read 记录与参考序列解析
//! - [`qc`] — 质量统计与低质量碱基屏蔽
//! - [`util`] — 碱基组成统计
//! - [`align`] — Hamming 距离比对
//! - [`pipeline`] — 五阶段流程与报告输出

pub mod align;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod qc;
pub mod util;

pub use error::{ReadmapError, Result};
