/*
Call SNPs from multiple sequence alignments and store them as a minimal VCF
    + pick the reference sequence out of each alignment
    + call SNPs for every other sequence against the reference
    + merge the SNPs of all sequences into one table
        + sequences without a SNP are homozygous reference
    + write the table with positions moved onto the reference genome

Implement clap to parse cli

Libs
    load_msa: read the alignment as header -> sequence
    reference: select the reference and parse its region
    snp: column-wise SNP calling against the reference
    merge: outer join of the per-sample SNPs
    vcf: write the merged SNPs

Arguments
    alignments or directories of alignments
    reference token, gap character, FILTER tag
    output directory and suffix
*/

mod bin_utils;
use clap::Parser;
use bin_utils::get_args::Cli;
use bin_utils::convert::run_batch;
use log::{debug, error, info};
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    let report = run_batch(&cli).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });
    info!("Converted {} alignments, {} failed", report.converted.len(), report.failed.len());
    if !report.failed.is_empty() {
        std::process::exit(1);
    }
}
