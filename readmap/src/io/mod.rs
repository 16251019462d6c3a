pub mod fastq;
pub mod reference;
pub mod token;
