use clap::Parser;
use std::path::PathBuf;
use msa_vcf::lib_utils::config::{ConverterConfig, DEFAULT_FILTER_TAG, DEFAULT_GAP, DEFAULT_REFERENCE_NAME};

#[derive(Parser, Debug)]
#[command(author, version, about = "Call SNPs from multiple sequence alignments and write them as VCF", long_about = None)]
pub struct Cli {
    /// Alignment file in fasta format, or a directory holding alignments. Repeatable.
    #[arg(short='i', long="infile", required = true, action=clap::ArgAction::Append)]
    pub input_alignment: Vec<PathBuf>,
    /// Directory for the VCF files, created if missing. Default: next to each alignment
    #[arg(short='o', long="outdir")]
    pub outdir: Option<PathBuf>,
    /// Text identifying the reference header. Default: "Pf3D7"
    #[arg(short='r', long="reference", default_value_t=String::from(DEFAULT_REFERENCE_NAME))]
    pub reference: String,
    /// Gap character of the alignment. Default: "-"
    #[arg(short='g', long="gap", default_value_t=DEFAULT_GAP)]
    pub gap: char,
    /// Value of the FILTER column. Default: "MSA"
    #[arg(short='f', long="filter-tag", default_value_t=String::from(DEFAULT_FILTER_TAG))]
    pub filter_tag: String,
    /// Keep the reference as a sample column
    #[arg(long="include-reference")]
    pub include_reference: bool,
    /// Suffix of alignments picked up from directories. Default: ".mafft.aln"
    #[arg(short='e', long="extension", default_value_t=String::from(".mafft.aln"))]
    pub extension: String,
    /// Suffix replacing the extension in the output name. Default: ".snp.vcf"
    #[arg(short='s', long="output-suffix", default_value_t=String::from(".snp.vcf"))]
    pub output_suffix: String,
}

impl Cli {
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            reference_name: self.reference.clone(),
            gap: self.gap,
            filter_tag: self.filter_tag.clone(),
            include_reference: self.include_reference,
        }
    }
}
