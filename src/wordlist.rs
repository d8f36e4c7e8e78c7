// src/wordlist.rs
use crate::error::Result;
use crate::types::RustPermuteError;
use log::debug;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Permutation words in file order. Blank lines are kept as empty entries and
/// nothing is trimmed or deduplicated. Clones share the same backing storage.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: Arc<[String]>,
}

impl Wordlist {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RustPermuteError::WordlistOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let wordlist = Self::from_words(String::from_utf8_lossy(&bytes).lines());
        debug!("Loaded {} words from {:?}", wordlist.len(), path);
        Ok(wordlist)
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
}

impl Deref for Wordlist {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_preserves_order_and_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "dev\n\nstaging\r\n Admin \ndev").unwrap();

        let wordlist = Wordlist::load(file.path()).unwrap();
        let words: Vec<&str> = wordlist.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["dev", "", "staging", " Admin ", "dev"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Wordlist::load("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, RustPermuteError::WordlistOpen { .. }));
    }

    #[test]
    fn test_clone_shares_words() {
        let wordlist = Wordlist::from_words(["a", "b"]);
        let clone = wordlist.clone();
        assert!(std::ptr::eq(wordlist.as_ptr(), clone.as_ptr()));
        assert_eq!(clone.len(), 2);
    }
}
