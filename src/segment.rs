//! Line segmentation into tagged tokens.
//!
//! The corpus only talks to the [`Segmenter`] trait, so a real morphological
//! analyser can be plugged in. [`DictSegmenter`] is the built-in fallback: it
//! cuts at Unicode word boundaries and glues registered words back together.

use std::collections::HashMap;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// One segmented token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub word: String,
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Splits text into tagged tokens and can be taught extra vocabulary.
pub trait Segmenter {
    /// Segment one line. Whitespace never comes back as a token.
    fn segment(&self, line: &str) -> Vec<Token>;

    /// Teach the segmenter a word so it is kept whole. Registering twice is a no-op.
    fn register_word(&mut self, word: &str);
}

/// Tag given to registered words unless told otherwise.
pub const DEFAULT_USER_TAG: &str = "n";

/// Word-boundary segmenter with a user dictionary.
///
/// Pieces come from the Unicode word-boundary rules (UAX #29). Adjacent
/// pieces whose concatenation is a registered word are merged, longest match
/// first, so `machine-learning` or a multi-character CJK term survive as one
/// token once registered.
///
/// # Example
/// ```
/// use word_network::{DictSegmenter, Segmenter};
/// let mut seg = DictSegmenter::new();
/// seg.register_word("e-mail");
/// let words: Vec<String> = seg.segment("send e-mail now").into_iter().map(|t| t.word).collect();
/// assert_eq!(words, vec!["send", "e-mail", "now"]);
/// ```
#[derive(Debug, Clone)]
pub struct DictSegmenter {
    user_words: HashMap<String, String>,
    user_tag: String,
    // longest registered word, in chars; bounds the merge window
    max_chars: usize,
}

impl Default for DictSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DictSegmenter {
    pub fn new() -> Self {
        Self::with_user_tag(DEFAULT_USER_TAG)
    }

    /// Segmenter whose registered words are tagged with `tag`.
    pub fn with_user_tag(tag: &str) -> Self {
        Self {
            user_words: HashMap::new(),
            user_tag: tag.to_string(),
            max_chars: 0,
        }
    }

    /// Register a word under an explicit tag. An existing entry keeps its tag.
    pub fn register_word_with_tag(&mut self, word: &str, tag: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        self.max_chars = self.max_chars.max(word.chars().count());
        self.user_words
            .entry(word.to_string())
            .or_insert_with(|| tag.to_string());
    }

    pub fn is_registered(&self, word: &str) -> bool {
        self.user_words.contains_key(word)
    }

    pub fn registered_len(&self) -> usize {
        self.user_words.len()
    }
}

impl Segmenter for DictSegmenter {
    fn segment(&self, line: &str) -> Vec<Token> {
        let pieces: Vec<(usize, &str)> = line.split_word_bound_indices().collect();
        let mut tokens = Vec::with_capacity(pieces.len());
        let mut i = 0;

        while i < pieces.len() {
            let (start, piece) = pieces[i];
            if is_blank(piece) {
                i += 1;
                continue;
            }

            let mut matched = None;
            if !self.user_words.is_empty() {
                // widest window first; a window never spans whitespace
                let mut end = i;
                let mut chars = 0;
                while end < pieces.len() && !is_blank(pieces[end].1) {
                    chars += pieces[end].1.chars().count();
                    if chars > self.max_chars {
                        break;
                    }
                    end += 1;
                }
                for j in (i + 1..=end).rev() {
                    let (last_start, last) = pieces[j - 1];
                    let candidate = &line[start..last_start + last.len()];
                    if let Some(tag) = self.user_words.get(candidate) {
                        matched = Some((j, Token::new(candidate, tag.as_str())));
                        break;
                    }
                }
            }

            match matched {
                Some((next, token)) => {
                    tokens.push(token);
                    i = next;
                }
                None => {
                    tokens.push(Token::new(piece, classify(piece)));
                    i += 1;
                }
            }
        }
        tokens
    }

    fn register_word(&mut self, word: &str) {
        let tag = self.user_tag.clone();
        self.register_word_with_tag(word, &tag);
    }
}

fn is_blank(piece: &str) -> bool {
    piece.chars().all(char::is_whitespace)
}

/// Coarse tag for an unregistered piece: `m` numbers, `eng` latin words, `x` the rest.
fn classify(piece: &str) -> &'static str {
    if piece.chars().any(char::is_numeric)
        && piece
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',')
    {
        "m"
    } else if piece.chars().all(|c| c.is_ascii_alphabetic() || c == '\'') {
        "eng"
    } else {
        "x"
    }
}
