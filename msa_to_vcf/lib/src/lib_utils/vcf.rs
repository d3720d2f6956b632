/*
    Minimal VCF
        ##fileformat line
        #CHROM POS ID REF ALT QUAL FILTER INFO FORMAT <samples>
        one tab separated line per merged SNP
    POS is moved onto the genome by adding the region start
*/

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use log::debug;
use crate::lib_utils::error::{MsaVcfError, Result};
use crate::lib_utils::merge::VariantTable;
use crate::lib_utils::reference::GenomicRegion;

pub const VCF_FILEFORMAT: &str = "##fileformat=VCFv4.2";
pub const VCF_COLUMNS: [&str; 9] = [
    "CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT",
];
pub const VCF_SEP: &str = "\t";
const QUAL: &str = "0";
const INFO: &str = "*";
const FORMAT: &str = "GT";

pub fn write_vcf<W: Write>(writer: &mut W, table: &VariantTable, region: &GenomicRegion,
                           filter_tag: &str) -> io::Result<()> {
    writeln!(writer, "{}", VCF_FILEFORMAT)?;
    let header: Vec<&str> = VCF_COLUMNS.iter()
        .copied()
        .chain(table.samples.iter().map(String::as_str))
        .collect();
    writeln!(writer, "#{}", header.join(VCF_SEP))?;

    for (record, genotypes) in &table.rows {
        let pos = region.start.checked_add(record.pos as u64).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData,
                           format!("position {} overflows the start of {}", record.pos, region))
        })?;
        let mut fields = vec![
            region.contig.clone(),
            pos.to_string(),
            record.id.clone(),
            record.ref_base.to_string(),
            record.alt_base.to_string(),
            QUAL.to_string(),
            filter_tag.to_string(),
            INFO.to_string(),
            FORMAT.to_string(),
        ];
        fields.extend(genotypes.iter().map(|genotype| genotype.to_string()));
        writeln!(writer, "{}", fields.join(VCF_SEP))?;
    }
    Ok(())
}

pub fn write_vcf_file(output: &Path, table: &VariantTable, region: &GenomicRegion,
                      filter_tag: &str) -> Result<()> {
    debug!("Writing {} rows to {:?}", table.len(), output);
    let out_file = File::create(output).map_err(|e| MsaVcfError::io(output, e))?;
    let mut vcf_writer = BufWriter::new(out_file);
    write_vcf(&mut vcf_writer, table, region, filter_tag)
        .and_then(|_| vcf_writer.flush())
        .map_err(|e| MsaVcfError::io(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib_utils::merge::merge_sample_calls;
    use crate::lib_utils::snp::{call_sample_snps, Genotype};

    fn region() -> GenomicRegion {
        GenomicRegion { contig: "Pf3D7_07_v3".to_string(), start: 1000, end: 1006 }
    }

    fn render(table: &VariantTable) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_vcf(&mut buffer, table, &region(), "MSA").unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_rows_with_offset() {
        let samples = vec![
            call_sample_snps("ACGT-T", "HB3", "ACCTAT", '-').unwrap(),
            call_sample_snps("ACGT-T", "Dd2", "ACGT-T", '-').unwrap(),
        ];
        let table = merge_sample_calls(&samples, Genotype::HomRef);
        let expected = "##fileformat=VCFv4.2\n\
                        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHB3\tDd2\n\
                        Pf3D7_07_v3\t1002\t.\tG\tC\t0\tMSA\t*\tGT\t1/1\t0/0\n";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_write_header_only_without_variants() {
        let samples = vec![call_sample_snps("ACGT", "HB3", "ACGT", '-').unwrap()];
        let table = merge_sample_calls(&samples, Genotype::HomRef);
        let output = render(&table);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].split('\t').count(), VCF_COLUMNS.len() + 1);
    }

    #[test]
    fn test_write_vcf_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("crt.snp.vcf");
        let samples = vec![call_sample_snps("ACGT", "HB3", "TCGA", '-').unwrap()];
        let table = merge_sample_calls(&samples, Genotype::HomRef);
        write_vcf_file(&output, &table, &region(), "MSA").unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        let positions: Vec<&str> = written.lines()
            .skip(2)
            .map(|line| line.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(positions, vec!["1000", "1003"]);
    }

    #[test]
    fn test_write_rejects_position_past_u64() {
        let samples = vec![call_sample_snps("AC", "HB3", "AG", '-').unwrap()];
        let table = merge_sample_calls(&samples, Genotype::HomRef);
        let region = GenomicRegion { contig: "c".to_string(), start: u64::MAX, end: u64::MAX };
        let mut buffer: Vec<u8> = Vec::new();
        let err = write_vcf(&mut buffer, &table, &region, "MSA").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_vcf_file_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("absent").join("out.vcf");
        let err = write_vcf_file(&output, &VariantTable::default(), &region(), "MSA").unwrap_err();
        assert!(matches!(err, MsaVcfError::Io { .. }));
    }
}
