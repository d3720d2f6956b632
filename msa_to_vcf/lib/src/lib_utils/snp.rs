/*
    Walk the alignment columns of the reference and one sample
        reference gap -> insertion in the sample, skipped, position unchanged
        sample gap    -> deletion in the sample, skipped, position advances
        same base     -> no variant, position advances
        other base    -> SNP at the current position, position advances
    Positions count reference bases only and start at 0
*/

use std::fmt;
use crate::lib_utils::error::{MsaVcfError, Result};

pub const MISSING_ID: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnpRecord {
    pub pos: usize,
    pub id: String,
    pub ref_base: char,
    pub alt_base: char,
}

impl SnpRecord {
    pub fn new(pos: usize, ref_base: char, alt_base: char) -> Self {
        Self {
            pos,
            id: MISSING_ID.to_string(),
            ref_base,
            alt_base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    HomRef,
    HomAlt,
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genotype::HomRef => write!(f, "0/0"),
            Genotype::HomAlt => write!(f, "1/1"),
        }
    }
}

/// SNPs of one sample, all carrying the same genotype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCalls {
    pub sample: String,
    pub genotype: Genotype,
    pub records: Vec<SnpRecord>,
}

pub fn call_snps(sample: &str, reference_seq: &str, sample_seq: &str, gap: char)
                 -> Result<Vec<SnpRecord>> {
    let reference_len = reference_seq.chars().count();
    let sample_len = sample_seq.chars().count();
    if reference_len != sample_len {
        return Err(MsaVcfError::LengthMismatch {
            sample: sample.to_string(),
            reference_len,
            sample_len,
        })
    }

    let mut pos = 0usize;
    let mut records = Vec::new();
    for (r, s) in reference_seq.chars().zip(sample_seq.chars()) {
        if r == gap {
            continue
        }
        if s != gap && s != r {
            records.push(SnpRecord::new(pos, r, s));
        }
        pos += 1;
    }
    Ok(records)
}

// SNPs found in a sample are homozygous ALT
pub fn call_sample_snps(reference_seq: &str, sample: &str, sample_seq: &str, gap: char)
                        -> Result<SampleCalls> {
    let records = call_snps(sample, reference_seq, sample_seq, gap)?;
    Ok(SampleCalls {
        sample: sample.to_string(),
        genotype: Genotype::HomAlt,
        records,
    })
}
