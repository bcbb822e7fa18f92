use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{NetworkError, Result};

/// Set of surface forms removed from the token stream.
///
/// Matching is exact: `The` and `the` are different stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    ///Load a UTF-8 stopword file, one word per line. Blank lines are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| NetworkError::Stopwords {
            path: path.to_path_buf(),
            source,
        })?;
        let filter = Self::from_words(
            content
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty()),
        );
        debug!("loaded {} stopwords from {}", filter.len(), path.display());
        Ok(filter)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_trims_line_endings_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "the\r\nof \n\nand\n").unwrap();
        let filter = StopwordFilter::load(file.path()).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("the"));
        assert!(filter.contains("of"));
        assert!(!filter.contains(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = StopwordFilter::from_words(["the"]);
        assert!(filter.contains("the"));
        assert!(!filter.contains("The"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopwordFilter::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, NetworkError::Stopwords { .. }));
    }
}
