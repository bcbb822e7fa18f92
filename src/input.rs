//! Reading documents and keyword lists from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{NetworkError, Result};

/// `path` itself if it is a file, otherwise every `.txt` file below it, sorted.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| x.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort();
    files
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Every non-empty line of every file under `path`; one line is one document.
pub fn read_documents(path: &Path) -> Result<Vec<String>> {
    let files = collect_files(path);
    if files.is_empty() && !path.exists() {
        return Err(NetworkError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        });
    }
    let mut documents = Vec::new();
    for file in &files {
        let content = read(file)?;
        let before = documents.len();
        documents.extend(non_empty_lines(&content).map(String::from));
        debug!("{}: {} documents", file.display(), documents.len() - before);
    }
    if documents.is_empty() {
        return Err(NetworkError::EmptyInput);
    }
    Ok(documents)
}

/// Keyword file, one keyword per line.
pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
    Ok(non_empty_lines(&read(path)?).map(String::from).collect())
}

/// Split one document's keyword list at `;` or `,`.
/// # Example
/// ```
/// use word_network::parse_keyword_list;
/// assert_eq!(parse_keyword_list("graph; network ,,rust"), vec!["graph", "network", "rust"]);
/// ```
pub fn parse_keyword_list(line: &str) -> Vec<String> {
    line.split([';', ','])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_walked_for_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.txt"), "two\n").unwrap();
        fs::write(dir.path().join("sub/a.TXT"), "one\n\n  three  \n").unwrap();
        fs::write(dir.path().join("skip.md"), "no\n").unwrap();

        let files = collect_files(dir.path());
        assert_eq!(files.len(), 2);

        let docs = read_documents(dir.path()).unwrap();
        assert_eq!(docs, vec!["two", "one", "three"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.txt"), "\n\n").unwrap();
        assert!(matches!(
            read_documents(dir.path()),
            Err(NetworkError::EmptyInput)
        ));
    }

    #[test]
    fn missing_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_documents(&dir.path().join("nope")),
            Err(NetworkError::Io { .. })
        ));
    }
}
