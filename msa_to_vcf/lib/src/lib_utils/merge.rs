/*
    Outer join of the per-sample SNPs on (POS, ID, REF, ALT)
        one row per distinct SNP across all samples
        one genotype column per sample, in input order
        samples without the SNP are filled afterwards
    Rows are kept sorted by the key, so input order never changes the rows
*/

use std::collections::BTreeMap;
use crate::lib_utils::snp::{Genotype, SampleCalls, SnpRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    pub samples: Vec<String>,
    pub rows: BTreeMap<SnpRecord, Vec<Genotype>>,
}

impl VariantTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn merge_sample_calls(calls: &[SampleCalls], fill_missing: Genotype) -> VariantTable {
    let n_samples = calls.len();
    let mut joined: BTreeMap<SnpRecord, Vec<Option<Genotype>>> = BTreeMap::new();
    for (column, sample) in calls.iter().enumerate() {
        for record in &sample.records {
            joined.entry(record.clone())
                .or_insert_with(|| vec![None; n_samples])[column] = Some(sample.genotype);
        }
    }

    let rows = joined.into_iter()
        .map(|(record, genotypes)| {
            let filled = genotypes.into_iter()
                .map(|genotype| genotype.unwrap_or(fill_missing))
                .collect();
            (record, filled)
        })
        .collect();
    VariantTable {
        samples: calls.iter().map(|sample| sample.sample.clone()).collect(),
        rows,
    }
}
