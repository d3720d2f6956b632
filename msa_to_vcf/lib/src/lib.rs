/*
    Open the alignment
    Read it as header -> aligned sequence
        Lines starting with ">" open a new sequence
        Following lines are stripped and appended until the next ">"
        Empty sequences, duplicated headers or sequence before a header are rejected
    Pick the reference out of the alignment
    Call SNPs for every other sequence against the reference
    Merge the per-sample SNPs into a single table
    Write the table as a minimal VCF
*/


use std::collections::HashSet;
use std::path::{Path, PathBuf};
use log::{debug, info, trace, warn};
pub mod lib_utils;
use lib_utils::config::ConverterConfig;
use lib_utils::error::{MsaVcfError, Result};
use lib_utils::merge::{merge_sample_calls, VariantTable};
use lib_utils::reference::{sample_name, select_reference, ReferenceRecord};
use lib_utils::snp::{call_sample_snps, Genotype, SampleCalls};
use lib_utils::struct_helper::FileBufferHelper;
use lib_utils::vcf::write_vcf_file;

const HEADER_MARKER: char = '>';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    pub header: String,
    pub sequence: String,
}

/// Aligned sequences keyed by header, kept in file order
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    entries: Vec<AlignedSequence>,
}

impl Alignment {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignedSequence> {
        self.entries.iter()
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries.iter()
            .find(|entry| entry.header == header)
            .map(|entry| entry.sequence.as_str())
    }
}

pub fn load_msa(infile: &Path) -> Result<Alignment> {
    let mut alignment_file = FileBufferHelper::new(infile)?;
    info!("File opened successfully - {:?}", infile);
    let mut entries: Vec<AlignedSequence> = Vec::new();
    let mut seen_headers: HashSet<String> = HashSet::new();

    while alignment_file.next_line()? {
        if alignment_file.line.starts_with(HEADER_MARKER) {
            let header = alignment_file.line.trim_end().to_string();
            trace!("Processing {}", header);
            if !seen_headers.insert(header.clone()) {
                return Err(MsaVcfError::validation(
                    format!("header '{}' appears more than once in {:?}", header, infile)))
            }
            entries.push(AlignedSequence { header, sequence: String::new() });
        } else {
            let chunk = alignment_file.line.trim();
            if chunk.is_empty() {
                continue
            }
            match entries.last_mut() {
                Some(entry) => entry.sequence.push_str(chunk),
                None => {
                    return Err(MsaVcfError::validation(
                        format!("sequence found before any header at line {} of {:?}",
                                alignment_file.line_number, infile)))
                }
            }
        }
    }

    // sanity check, a truncated file leaves a header without sequence
    if let Some(empty) = entries.iter().find(|entry| entry.sequence.is_empty()) {
        return Err(MsaVcfError::validation(
            format!("no sequence found for '{}' in {:?}", empty.header, infile)))
    }
    info!("Loaded {} aligned sequences from {:?}", entries.len(), infile);
    Ok(Alignment { entries })
}

/// Counts reported after a VCF has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VcfSummary {
    pub samples: usize,
    pub variants: usize,
}

pub struct MsaToVcf {
    pub path: PathBuf,
    pub config: ConverterConfig,
    pub alignment: Alignment,
}

impl MsaToVcf {
    pub fn new(path: &Path, config: ConverterConfig) -> Result<MsaToVcf> {
        let alignment = load_msa(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            config,
            alignment,
        })
    }

    pub fn reference(&self) -> Result<ReferenceRecord> {
        let reference = select_reference(&self.alignment, &self.config.reference_name)?;
        info!("Reference {} covers {}", reference.name, reference.region);
        let ungapped = reference.ungapped_len(self.config.gap) as u64;
        // the last reference base must still have a genomic coordinate
        if reference.region.start.checked_add(ungapped.saturating_sub(1)).is_none() {
            return Err(MsaVcfError::parse(&reference.header,
                format!("{} ungapped bases starting at {} run past the largest coordinate",
                        ungapped, reference.region.start)))
        }
        match reference.region.span() {
            Some(span) if span == ungapped => {}
            span => warn!("Reference {} has {} ungapped bases but its header spans {:?}",
                          reference.name, ungapped, span),
        }
        Ok(reference)
    }

    pub fn sample_calls(&self, reference: &ReferenceRecord) -> Result<Vec<SampleCalls>> {
        let mut calls = Vec::with_capacity(self.alignment.len());
        let mut seen_names: HashSet<&str> = HashSet::new();
        for entry in self.alignment.iter() {
            if entry.header == reference.header && !self.config.include_reference {
                continue
            }
            let name = sample_name(&entry.header);
            // one VCF column per sample name
            if !seen_names.insert(name) {
                return Err(MsaVcfError::validation(
                    format!("sample name '{}' is shared by more than one header in {:?}",
                            name, self.path)))
            }
            let sample = call_sample_snps(&reference.sequence, name, &entry.sequence,
                                          self.config.gap)?;
            debug!("{} carries {} SNPs", sample.sample, sample.records.len());
            calls.push(sample);
        }
        Ok(calls)
    }

    pub fn build_table(&self) -> Result<(ReferenceRecord, VariantTable)> {
        let reference = self.reference()?;
        let calls = self.sample_calls(&reference)?;
        let table = merge_sample_calls(&calls, Genotype::HomRef);
        info!("Merged {} samples into {} variant rows", table.samples.len(), table.len());
        Ok((reference, table))
    }

    pub fn create_vcf(&self, output: &Path) -> Result<VcfSummary> {
        // nothing touches the output until the whole table is built
        let (reference, table) = self.build_table()?;
        write_vcf_file(output, &table, &reference.region, &self.config.filter_tag)?;
        info!("VCF written to: {:?}", output);
        Ok(VcfSummary {
            samples: table.samples.len(),
            variants: table.len(),
        })
    }
}
