//! Run configuration

use crate::analysis::constants::{
    DEFAULT_DELIMITER, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_SUMMARY_ROWS,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a [`PipelineConfig`]
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error("{} is used for more than one of input, output, ranked output and corpus", .0.display())]
    ConflictingPaths(PathBuf),
}

/// Settings for a single run of the pipeline.
///
/// [`Default`] reproduces the fixed-name behaviour: `freq.csv` in, `;` as the
/// separator, `zipf_distribution.png` out, and the chart opened afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Delimited frequency table to read
    pub input: PathBuf,
    /// Image to write
    pub output: PathBuf,
    /// Field separator for both input and export
    pub delimiter: u8,
    /// Number of ranks printed to the console, 0 to disable
    pub top: usize,
    /// Optional CSV export of the ranked table
    pub ranked_output: Option<PathBuf>,
    /// Open the written image in the default viewer
    pub show: bool,
    /// Text files to count into `input` before loading it
    pub corpus: Vec<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            delimiter: DEFAULT_DELIMITER,
            top: DEFAULT_SUMMARY_ROWS,
            ranked_output: None,
            show: true,
            corpus: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Rejects configurations where one file would overwrite another.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut paths = vec![&self.input, &self.output];
        paths.extend(self.ranked_output.as_ref());

        for (index, path) in paths.iter().enumerate() {
            if paths[index + 1..].contains(path) {
                return Err(ConfigError::ConflictingPaths(path.to_path_buf()));
            }
        }

        if let Some(path) = self.corpus.iter().find(|path| paths.contains(path)) {
            return Err(ConfigError::ConflictingPaths(path.clone()));
        }

        Ok(())
    }
}

/// Converts a user-supplied separator into the byte the CSV reader expects.
pub fn parse_delimiter(delimiter: char) -> Result<u8, ConfigError> {
    if delimiter.is_ascii() && !matches!(delimiter, '"' | '\n' | '\r') {
        Ok(delimiter as u8)
    } else {
        Err(ConfigError::InvalidDelimiter(delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.input, PathBuf::from("freq.csv"));
        assert_eq!(config.output, PathBuf::from("zipf_distribution.png"));
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.top, 10);
        assert_eq!(config.ranked_output, None);
        assert!(config.show);
        assert!(config.corpus.is_empty());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_distinct_paths() {
        let config = PipelineConfig {
            ranked_output: Some(PathBuf::from("ranked.csv")),
            corpus: vec![PathBuf::from("corpus.txt")],
            ..PipelineConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    #[case::export_over_image(None, Some("zipf_distribution.png"), vec![])]
    #[case::export_over_input(None, Some("freq.csv"), vec![])]
    #[case::image_over_input(Some("freq.csv"), None, vec![])]
    #[case::table_over_corpus(None, None, vec!["freq.csv"])]
    #[case::image_over_corpus(None, None, vec!["corpus.txt", "zipf_distribution.png"])]
    fn test_validate_rejects_conflicting_paths(
        #[case] output: Option<&str>,
        #[case] ranked_output: Option<&str>,
        #[case] corpus: Vec<&str>,
    ) {
        let defaults = PipelineConfig::default();
        let config = PipelineConfig {
            output: output.map_or(defaults.output.clone(), PathBuf::from),
            ranked_output: ranked_output.map(PathBuf::from),
            corpus: corpus.into_iter().map(PathBuf::from).collect(),
            ..defaults
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConflictingPaths(_))
        ));
    }

    #[rstest]
    #[case(';', b';')]
    #[case(',', b',')]
    #[case('\t', b'\t')]
    #[case('|', b'|')]
    fn test_parse_delimiter(#[case] input: char, #[case] expected: u8) {
        assert_eq!(parse_delimiter(input), Ok(expected));
    }

    #[rstest]
    #[case('ж')]
    #[case('"')]
    #[case('\n')]
    fn test_parse_delimiter_rejects(#[case] input: char) {
        assert_eq!(parse_delimiter(input), Err(ConfigError::InvalidDelimiter(input)));
    }
}
