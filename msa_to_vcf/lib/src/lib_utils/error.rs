// errors raised while turning an alignment into a VCF
// every variant is fatal for the file being converted

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MsaVcfError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header does not follow `<sample> | <contig>:<start>-<end>`
    #[error("Malformed header '{header}': {message}")]
    Parse { header: String, message: String },

    /// Zero or several headers carry the reference token
    #[error("Exactly one sequence in the alignment must include '{token}' in its header, found {found}")]
    Selection { token: String, found: usize },

    #[error("Sequence '{sample}' has aligned length {sample_len}, reference has {reference_len}")]
    LengthMismatch {
        sample: String,
        reference_len: usize,
        sample_len: usize,
    },

    #[error("Invalid alignment: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, MsaVcfError>;

impl MsaVcfError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            header: header.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
