use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use readmap::align::MapOpt;
use readmap::pipeline::{self, PipelineOpt};
use readmap::qc::MaskOpt;

#[derive(Parser, Debug)]
#[command(name = "readmap", author, version, about = "Staged read QC, masking and mapping against a reference")]
struct Cli {
    /// Input with read records, a '#' terminator line and the reference (stdin if omitted or '-')
    input: Option<String>,
    /// Mask bases whose error probability is above this value
    #[arg(long = "max-error-prob", default_value_t = readmap::qc::MAX_ERROR_PROB)]
    max_error_prob: f64,
    /// Allowed mismatches per read base, floored
    #[arg(long = "max-mismatch-rate", default_value_t = readmap::align::DEFAULT_MAX_MISMATCH_RATE)]
    max_mismatch_rate: f64,
    /// Fixed mismatch limit, overrides --max-mismatch-rate
    #[arg(long = "max-mismatches")]
    max_mismatches: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.max_error_prob) {
        anyhow::bail!("--max-error-prob must be within [0, 1], got {}", cli.max_error_prob);
    }
    if !(0.0..=1.0).contains(&cli.max_mismatch_rate) {
        anyhow::bail!("--max-mismatch-rate must be within [0, 1], got {}", cli.max_mismatch_rate);
    }

    let opt = PipelineOpt {
        mask: MaskOpt { threshold: cli.max_error_prob },
        map: MapOpt { max_mismatch_rate: cli.max_mismatch_rate, max_mismatches: cli.max_mismatches },
    };

    let input: Box<dyn std::io::BufRead> = match cli.input.as_deref() {
        None | Some("-") => Box::new(std::io::stdin().lock()),
        Some(p) => {
            let fh = std::fs::File::open(p).map_err(|e| anyhow::anyhow!("cannot open input '{}': {}", p, e))?;
            Box::new(std::io::BufReader::new(fh))
        }
    };
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());

    pipeline::run(input, &mut out, opt)?;
    Ok(())
}
