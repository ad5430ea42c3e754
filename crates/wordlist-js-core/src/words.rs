//! Word list loading.
//!
//! A word list is a plain text file with one word per line. Each line is
//! taken exactly as written, minus its line terminator: no trimming, no
//! deduplication, and blank lines survive as empty words.

use camino::Utf8Path;

use crate::error::{ConvertError, ConvertResult};

/// An ordered list of words, in source file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Split text into words, one per line.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A final line without a
    /// terminator still counts, and a trailing terminator does not add an
    /// empty word.
    pub fn from_text(text: &str) -> Self {
        let mut words = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let Some(end) = rest.find(['\n', '\r']) else {
                words.push(rest.to_owned());
                break;
            };
            words.push(rest[..end].to_owned());
            let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + terminator..];
        }
        Self { words }
    }

    /// Number of words in the list.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Borrow the words as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Read a word list from a UTF-8 text file.
///
/// The file handle is released before this returns.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn read_word_list(path: &Utf8Path) -> ConvertResult<WordList> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConvertError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })?;

    let words = WordList::from_text(&text);
    tracing::debug!(words = words.len(), bytes = text.len(), "word list loaded");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn words(list: &WordList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn splits_one_word_per_line() {
        let list = WordList::from_text("gato\nperro\nsol\n");
        assert_eq!(words(&list), ["gato", "perro", "sol"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let list = WordList::from_text("gato\nperro");
        assert_eq!(words(&list), ["gato", "perro"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        let list = WordList::from_text("");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn surrounding_spaces_are_preserved() {
        let list = WordList::from_text("  luna \n\tmar\n");
        assert_eq!(words(&list), ["  luna ", "\tmar"]);
    }

    #[test]
    fn blank_lines_become_empty_words() {
        let list = WordList::from_text("uno\n\ndos\n");
        assert_eq!(words(&list), ["uno", "", "dos"]);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let list = WordList::from_text("año\r\nñandú\r\n");
        assert_eq!(words(&list), ["año", "ñandú"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let list = WordList::from_text("gato\rperro\n");
        assert_eq!(words(&list), ["gato", "perro"]);
    }

    #[test]
    fn mixed_terminators_split_alike() {
        let list = WordList::from_text("uno\rdos\r\ntres\ncuatro\r");
        assert_eq!(words(&list), ["uno", "dos", "tres", "cuatro"]);
    }

    #[test]
    fn blank_line_between_carriage_returns_is_kept() {
        let list = WordList::from_text("uno\r\rdos");
        assert_eq!(words(&list), ["uno", "", "dos"]);
    }

    #[test]
    fn collects_from_iterator() {
        let list: WordList = ["a", "b"].into_iter().collect();
        assert_eq!(list.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn reads_word_list_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("diccionario.txt")).unwrap();
        fs::write(&path, "camión\nárbol\n").unwrap();

        let list = read_word_list(&path).unwrap();
        assert_eq!(words(&list), ["camión", "árbol"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("missing.txt")).unwrap();

        let err = read_word_list(&path).unwrap_err();
        assert!(matches!(err, ConvertError::ReadInput { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("latin1.txt")).unwrap();
        fs::write(&path, b"a\xf1o\n").unwrap();

        let err = read_word_list(&path).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidEncoding { .. }));
    }
}
