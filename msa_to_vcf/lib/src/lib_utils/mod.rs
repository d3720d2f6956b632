pub mod config;
pub mod error;
pub mod merge;
pub mod reference;
pub mod snp;
pub mod struct_helper;
pub mod vcf;
