/*
    Find the reference in the alignment
        Exactly one header must contain the reference token
    Read its region out of the header
        >sample | contig:start-end
        region is whatever follows the last "|"
*/

use std::fmt;
use log::debug;
use crate::Alignment;
use crate::lib_utils::error::{MsaVcfError, Result};

const FIELD_SEP: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicRegion {
    pub contig: String,
    pub start: u64,
    pub end: u64,
}

impl GenomicRegion {
    /// Number of bases covered, both ends included
    pub fn span(&self) -> Option<u64> {
        self.end.checked_sub(self.start)?.checked_add(1)
    }
}

impl fmt::Display for GenomicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub header: String,
    pub name: String,
    pub region: GenomicRegion,
    pub sequence: String,
}

impl ReferenceRecord {
    pub fn ungapped_len(&self, gap: char) -> usize {
        self.sequence.chars().filter(|&base| base != gap).count()
    }
}

// text between the leading ">" and the first "|"
pub fn sample_name(header: &str) -> &str {
    let header = header.strip_prefix('>').unwrap_or(header);
    match header.split_once(FIELD_SEP) {
        Some((name, _)) => name.trim(),
        None => header.trim(),
    }
}

pub fn parse_region(header: &str) -> Result<GenomicRegion> {
    let region = match header.rsplit_once(FIELD_SEP) {
        Some((_, region)) => region.trim(),
        None => return Err(MsaVcfError::parse(header, "expected '|' before the region")),
    };
    let (contig, interval) = match region.split(':').collect::<Vec<&str>>()[..] {
        [contig, interval] if !contig.trim().is_empty() => (contig.trim(), interval.trim()),
        _ => return Err(MsaVcfError::parse(header,
                                           format!("region '{}' is not contig:start-end", region))),
    };
    let (start, end) = match interval.split('-').collect::<Vec<&str>>()[..] {
        [start, end] => (parse_coordinate(header, start)?, parse_coordinate(header, end)?),
        _ => return Err(MsaVcfError::parse(header,
                                           format!("interval '{}' is not start-end", interval))),
    };
    if start > end {
        return Err(MsaVcfError::parse(header, format!("start {} is past end {}", start, end)))
    }
    Ok(GenomicRegion {
        contig: contig.to_string(),
        start,
        end,
    })
}

fn parse_coordinate(header: &str, value: &str) -> Result<u64> {
    value.trim()
        .parse::<u64>()
        .map_err(|e| MsaVcfError::parse(header, format!("bad coordinate '{}': {}", value, e)))
}

pub fn select_reference(alignment: &Alignment, token: &str) -> Result<ReferenceRecord> {
    let matches: Vec<_> = alignment.iter()
        .filter(|entry| entry.header.contains(token))
        .collect();
    let entry = match matches[..] {
        [entry] => entry,
        _ => return Err(MsaVcfError::Selection {
            token: token.to_string(),
            found: matches.len(),
        }),
    };
    debug!("Reference header: {}", entry.header);
    let region = parse_region(&entry.header)?;
    Ok(ReferenceRecord {
        header: entry.header.clone(),
        name: sample_name(&entry.header).to_string(),
        region,
        sequence: entry.sequence.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_msa;
    use std::io::Write;

    fn alignment(contents: &str) -> Alignment {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        load_msa(file.path()).unwrap()
    }

    #[test]
    fn test_parse_region() {
        let region = parse_region(">Pf3D7 | Pf3D7_07_v3:1000-1006").unwrap();
        assert_eq!(region, GenomicRegion { contig: "Pf3D7_07_v3".to_string(), start: 1000, end: 1006 });
        assert_eq!(region.to_string(), "Pf3D7_07_v3:1000-1006");
        assert_eq!(region.span(), Some(7));
    }

    #[test]
    fn test_span_at_coordinate_limit() {
        let region = parse_region(">Pf3D7 | c:0-18446744073709551615").unwrap();
        assert_eq!(region.span(), None);
        let region = parse_region(">Pf3D7 | c:18446744073709551615-18446744073709551615").unwrap();
        assert_eq!(region.span(), Some(1));
    }

    #[test]
    fn test_parse_region_uses_last_field() {
        let region = parse_region(">Pf3D7 | crt | Pf3D7_07_v3:403222-406317 ").unwrap();
        assert_eq!(region.contig, "Pf3D7_07_v3");
        assert_eq!(region.start, 403222);
        assert_eq!(region.end, 406317);
    }

    #[test]
    fn test_parse_region_malformed() {
        for header in [
            ">Pf3D7 Pf3D7_07_v3:1000-1006",
            ">Pf3D7 | Pf3D7_07_v3",
            ">Pf3D7 | Pf3D7_07_v3:1000",
            ">Pf3D7 | a:b:1-2",
            ">Pf3D7 | Pf3D7_07_v3:x-1006",
            ">Pf3D7 | Pf3D7_07_v3:1006-1000",
            ">Pf3D7 | :1-2",
        ] {
            assert!(matches!(parse_region(header), Err(MsaVcfError::Parse { .. })), "{}", header);
        }
    }

    #[test]
    fn test_sample_name() {
        assert_eq!(sample_name(">Pf3D7 | Pf3D7_07_v3:1000-1006"), "Pf3D7");
        assert_eq!(sample_name(">HB3|crt|Pf3D7_07_v3:1-6"), "HB3");
        assert_eq!(sample_name(">Dd2"), "Dd2");
    }

    #[test]
    fn test_select_reference() {
        let alignment = alignment(">HB3 | chr7:1-6\nACCTAT\n>Pf3D7 | Pf3D7_07_v3:1000-1006\nACGT-T\n");
        let reference = select_reference(&alignment, "Pf3D7").unwrap();
        assert_eq!(reference.name, "Pf3D7");
        assert_eq!(reference.sequence, "ACGT-T");
        assert_eq!(reference.region.start, 1000);
        assert_eq!(reference.ungapped_len('-'), 5);
    }

    #[test]
    fn test_select_reference_missing_or_ambiguous() {
        let alignment = alignment(">HB3 | chr7:1-4\nACGT\n>Dd2 | chr7:1-4\nACGT\n");
        assert!(matches!(select_reference(&alignment, "Pf3D7"),
                         Err(MsaVcfError::Selection { found: 0, .. })));
        assert!(matches!(select_reference(&alignment, "chr7"),
                         Err(MsaVcfError::Selection { found: 2, .. })));
    }

    #[test]
    fn test_select_reference_bad_header() {
        let alignment = alignment(">Pf3D7 chr7:1-4\nACGT\n>Dd2 | chr7:1-4\nACGT\n");
        assert!(matches!(select_reference(&alignment, "Pf3D7"), Err(MsaVcfError::Parse { .. })));
    }
}
