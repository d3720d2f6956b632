/*
    Convert every alignment given on the command line
        directories are expanded to the alignments they hold
        each alignment becomes <name><output_suffix> in the output directory
    A failing alignment is reported and the remaining ones still run
*/

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, error, info, warn};
use msa_vcf::MsaToVcf;
use msa_vcf::lib_utils::config::ConverterConfig;
use msa_vcf::lib_utils::error::{MsaVcfError, Result};
use crate::bin_utils::get_args::Cli;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

// expand directories into the files ending with `extension`, sorted by name
pub fn collect_alignments(inputs: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut alignments = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in fs::read_dir(input).map_err(|e| MsaVcfError::io(input, e))? {
                let path = entry.map_err(|e| MsaVcfError::io(input, e))?.path();
                let matches = path.file_name()
                    .and_then(|name| name.to_str())
                    .map_or(false, |name| name.ends_with(extension));
                if path.is_file() && matches {
                    found.push(path);
                }
            }
            found.sort();
            info!("Found {} {} files in {:?}", found.len(), extension, input);
            alignments.extend(found);
        } else {
            alignments.push(input.clone());
        }
    }
    Ok(alignments)
}

pub fn output_path(alignment: &Path, outdir: Option<&Path>, extension: &str, suffix: &str) -> PathBuf {
    let file_name = alignment.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(extension).unwrap_or(file_name.as_str());
    let out_name = format!("{}{}", stem, suffix);
    match outdir {
        Some(dir) => dir.join(out_name),
        None => alignment.with_file_name(out_name),
    }
}

fn convert_one(alignment: &Path, output: &Path, config: &ConverterConfig) -> Result<()> {
    if output == alignment {
        return Err(MsaVcfError::validation(
            format!("output {:?} would overwrite its own alignment", output)))
    }
    let converter = MsaToVcf::new(alignment, config.clone())?;
    let summary = converter.create_vcf(output)?;
    info!("{:?}: {} variants across {} samples", alignment, summary.variants, summary.samples);
    Ok(())
}

pub fn run_batch(cli: &Cli) -> Result<BatchReport> {
    let alignments = collect_alignments(&cli.input_alignment, &cli.extension)?;
    if alignments.is_empty() {
        warn!("No alignments to convert");
    }
    if let Some(outdir) = &cli.outdir {
        fs::create_dir_all(outdir).map_err(|e| MsaVcfError::io(outdir, e))?;
        debug!("Output directory ready: {:?}", outdir);
    }

    let config = cli.converter_config();
    let mut report = BatchReport::default();
    for alignment in alignments {
        let output = output_path(&alignment, cli.outdir.as_deref(), &cli.extension,
                                 &cli.output_suffix);
        debug!("Processing file: {:?} -> {:?}", alignment, output);
        match convert_one(&alignment, &output, &config) {
            Ok(()) => report.converted.push(alignment),
            Err(e) => {
                error!("Conversion failed for {:?}: {}", alignment, e);
                report.failed.push(alignment);
            }
        }
    }
    Ok(report)
}
