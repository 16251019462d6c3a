//! 五个阶段的批处理流程：读取 reads、统计质量、屏蔽、参考序列组成、比对

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::align::{self, MapOpt, MapResult};
use crate::error::{ReadmapError, Result};
use crate::io::fastq::{FastqReader, ReadRecord, RecordEvent};
use crate::io::reference;
use crate::qc::{self, MaskOpt};
use crate::util::dna::{self, BaseCounts};

/// 最多读取的 read 数（包含第一条）
pub const MAX_NUM_READS: usize = 100;

const STAGE_RULE: &str = "==========";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PipelineOpt {
    pub mask: MaskOpt,
    pub map: MapOpt,
}

/// Buffers threaded through the stages. Each stage fills in its part.
#[derive(Debug, Default)]
pub struct PipelineContext {
    pub reads: Vec<ReadRecord>,
    pub reference: Vec<u8>,
    pub composition: BaseCounts,
    pub mappings: Vec<MapResult>,
}

impl PipelineContext {
    pub fn new() -> Self {
        Self { reads: Vec::with_capacity(MAX_NUM_READS), ..Self::default() }
    }

    fn push_read(&mut self, rec: ReadRecord) -> Result<()> {
        if self.reads.len() >= MAX_NUM_READS {
            return Err(ReadmapError::CapacityExceeded { what: "reads", max: MAX_NUM_READS });
        }
        self.reads.push(rec);
        Ok(())
    }
}

/// Run all five stages over `input`, writing the report to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, opt: PipelineOpt) -> Result<PipelineContext> {
    let mut ctx = PipelineContext::new();
    let mut reader = FastqReader::new(input);

    stage_one(&mut ctx, &mut reader, out)?;
    stage_two(&mut ctx, &mut reader, out)?;
    stage_three(&mut ctx, out, opt.mask)?;
    stage_four(&mut ctx, &mut reader, out)?;
    stage_five(&mut ctx, out, opt.map)?;

    out.flush()?;
    Ok(ctx)
}

fn write_header<W: Write>(out: &mut W, stage: u8) -> Result<()> {
    if stage > 1 {
        writeln!(out)?;
    }
    writeln!(out, "Stage {}", stage)?;
    writeln!(out, "{}", STAGE_RULE)?;
    Ok(())
}

/// Stage 1: read the first record and report its lowest-quality base.
pub fn stage_one<R: BufRead, W: Write>(
    ctx: &mut PipelineContext,
    reader: &mut FastqReader<R>,
    out: &mut W,
) -> Result<()> {
    write_header(out, 1)?;
    let first = match reader.read_record()? {
        RecordEvent::Read(rec) => rec,
        RecordEvent::EndOfReads => return Err(ReadmapError::EmptyInput("read collection")),
    };

    let idx = qc::index_of_min_quality(&first.qual)?;
    writeln!(out, "Base with the smallest quality score: {}", first.seq[idx] as char)?;
    writeln!(out, "Index: {}", idx)?;

    ctx.push_read(first)
}

/// Stage 2: read the remaining records up to the terminator.
pub fn stage_two<R: BufRead, W: Write>(
    ctx: &mut PipelineContext,
    reader: &mut FastqReader<R>,
    out: &mut W,
) -> Result<()> {
    write_header(out, 2)?;
    while let RecordEvent::Read(rec) = reader.read_record()? {
        ctx.push_read(rec)?;
    }
    info!("read {} records", ctx.reads.len());

    let idx = qc::index_of_smallest_average(ctx.reads.iter().map(|r| r.qual.as_slice()))?;
    let worst = &ctx.reads[idx];
    writeln!(out, "Total number of reads: {}", ctx.reads.len())?;
    writeln!(out, "Smallest average quality score: {:.2}", qc::average_quality(&worst.qual)?)?;
    writeln!(out, "Read with the smallest average quality score:")?;
    writeln!(out, "{}", String::from_utf8_lossy(&worst.seq))?;
    Ok(())
}

/// Stage 3: mask low-confidence bases in every read.
pub fn stage_three<W: Write>(ctx: &mut PipelineContext, out: &mut W, opt: MaskOpt) -> Result<()> {
    write_header(out, 3)?;
    let n_masked = qc::mask_collection(&mut ctx.reads, opt);
    debug!("masked {} bases at error probability > {}", n_masked, opt.threshold);

    for rec in &ctx.reads {
        writeln!(out, "{}", String::from_utf8_lossy(&rec.seq))?;
    }
    Ok(())
}

/// Stage 4: read the reference and report its base composition.
pub fn stage_four<R: BufRead, W: Write>(
    ctx: &mut PipelineContext,
    reader: &mut FastqReader<R>,
    out: &mut W,
) -> Result<()> {
    write_header(out, 4)?;
    ctx.reference = reference::read_reference(reader.tokens_mut())?;
    ctx.composition = dna::summarize(&ctx.reference);

    let c = &ctx.composition;
    info!("reference: {} bp, GC {:.3}, {} non-ACGT", c.len, c.gc_fraction(), c.other());
    writeln!(out, "Length of the reference sequence: {}", c.len)?;
    writeln!(out, "Number of A bases: {}", c.a)?;
    writeln!(out, "Number of C bases: {}", c.c)?;
    writeln!(out, "Number of G bases: {}", c.g)?;
    writeln!(out, "Number of T bases: {}", c.t)?;
    Ok(())
}

/// Stage 5: map each masked read to the reference.
pub fn stage_five<W: Write>(ctx: &mut PipelineContext, out: &mut W, opt: MapOpt) -> Result<()> {
    write_header(out, 5)?;
    ctx.mappings = align::map_reads(&ctx.reads, &ctx.reference, opt);

    let n_mapped = ctx.mappings.iter().filter(|m| m.is_some()).count();
    info!("mapped {} of {} reads", n_mapped, ctx.reads.len());

    for (i, m) in ctx.mappings.iter().enumerate() {
        match m {
            Some(h) if h.n_best > 1 => writeln!(
                out,
                "Read {}: position {}, mismatches {} ({} equally good)",
                i, h.offset, h.mismatches, h.n_best
            )?,
            Some(h) => writeln!(out, "Read {}: position {}, mismatches {}", i, h.offset, h.mismatches)?,
            None => writeln!(out, "Read {}: no match", i)?,
        }
    }
    Ok(())
}
