// settings handed to the converter
// defaults reproduce the Pf3D7 truthset layout

pub const DEFAULT_REFERENCE_NAME: &str = "Pf3D7";
pub const DEFAULT_GAP: char = '-';
pub const DEFAULT_FILTER_TAG: &str = "MSA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Substring identifying the reference header
    pub reference_name: String,
    /// Gap character used by the aligner
    pub gap: char,
    /// Constant written in the FILTER column
    pub filter_tag: String,
    /// Also emit the reference as a sample column (all "0/0")
    pub include_reference: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            reference_name: DEFAULT_REFERENCE_NAME.to_string(),
            gap: DEFAULT_GAP,
            filter_tag: DEFAULT_FILTER_TAG.to_string(),
            include_reference: false,
        }
    }
}
