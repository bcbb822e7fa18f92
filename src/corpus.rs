//! Tokenized corpus and its document-term matrix.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use log::{debug, info};
use ndarray::{Array2, ArrayView1};

use crate::error::Result;
use crate::segment::{DEFAULT_USER_TAG, Segmenter};
use crate::stopwords::StopwordFilter;

/// Lowercased word -> part-of-speech tags in the order they were first seen.
pub type Annotations = BTreeMap<String, Vec<String>>;

/// Document x word count matrix over whitespace-delimited tokens.
///
/// Tokens are lowercased before counting; the vocabulary is sorted.
/// Case folding only touches scripts that have case, so CJK tokens pass
/// through unchanged while `Rust` and `rust` share a column.
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    counts: Array2<u32>,
}

impl DocumentTermMatrix {
    /// Vectorize documents. Every whitespace-separated run is one token.
    ///
    /// # Example
    /// ```
    /// use word_network::DocumentTermMatrix;
    /// let dtm = DocumentTermMatrix::fit(&["b a", "A c"]);
    /// assert_eq!(dtm.vocabulary(), ["a", "b", "c"]);
    /// assert_eq!(dtm.counts()[[1, 0]], 1);
    /// ```
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let vocabulary: Vec<String> = documents
            .iter()
            .flat_map(|doc| doc.as_ref().split_whitespace())
            .map(str::to_lowercase)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        let mut counts = Array2::<u32>::zeros((documents.len(), vocabulary.len()));
        for (d, doc) in documents.iter().enumerate() {
            for token in doc.as_ref().split_whitespace() {
                if let Some(&w) = index.get(&token.to_lowercase()) {
                    counts[[d, w]] += 1;
                }
            }
        }

        Self {
            vocabulary,
            index,
            counts,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn counts(&self) -> &Array2<u32> {
        &self.counts
    }

    /// Column of `word`, which must already be lowercased.
    pub fn column(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Per-document counts of the word in column `col`.
    pub fn term_vector(&self, col: usize) -> ArrayView1<'_, u32> {
        self.counts.column(col)
    }

    pub fn document_count(&self) -> usize {
        self.counts.nrows()
    }
}

/// Inputs for [`Corpus::build`].
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// Registered with the segmenter before any line is cut.
    pub keywords: Vec<String>,
    /// Stopword file; `None` disables filtering.
    pub stopwords: Option<PathBuf>,
    /// Record part-of-speech tags per word.
    pub track_tags: bool,
    /// Tag merged into every keyword's tag set when tracking is on.
    pub keyword_tag: String,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            stopwords: None,
            track_tags: false,
            keyword_tag: DEFAULT_USER_TAG.to_string(),
        }
    }
}

/// Segmented documents plus their document-term matrix.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<String>,
    dtm: DocumentTermMatrix,
    annotations: Option<Annotations>,
}

impl Corpus {
    /// Segment `lines` and vectorize them. Fails only if the stopword file is unreadable.
    pub fn build<S, L>(segmenter: &mut S, lines: &[L], options: &CorpusOptions) -> Result<Self>
    where
        S: Segmenter + ?Sized,
        L: AsRef<str>,
    {
        let filter = match &options.stopwords {
            Some(path) => StopwordFilter::load(path)?,
            None => StopwordFilter::empty(),
        };
        Ok(Self::with_stopwords(segmenter, lines, options, &filter))
    }

    /// Like [`Corpus::build`] with an already loaded stopword filter.
    /// `options.stopwords` is ignored.
    pub fn with_stopwords<S, L>(
        segmenter: &mut S,
        lines: &[L],
        options: &CorpusOptions,
        stopwords: &StopwordFilter,
    ) -> Self
    where
        S: Segmenter + ?Sized,
        L: AsRef<str>,
    {
        // all custom vocabulary goes in before the first line is segmented
        for keyword in &options.keywords {
            segmenter.register_word(keyword);
        }

        let mut annotations = options.track_tags.then(Annotations::new);
        let mut documents = Vec::with_capacity(lines.len());
        for line in lines {
            let kept: Vec<_> = segmenter
                .segment(line.as_ref())
                .into_iter()
                .filter(|t| !stopwords.contains(&t.word))
                .collect();
            if let Some(ann) = annotations.as_mut() {
                for token in &kept {
                    record_tag(ann, token.word.to_lowercase(), &token.tag);
                }
            }
            documents.push(
                kept.iter()
                    .map(|t| t.word.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }

        let dtm = DocumentTermMatrix::fit(&documents);

        if let Some(ann) = annotations.as_mut() {
            for keyword in &options.keywords {
                record_tag(ann, keyword.to_lowercase(), &options.keyword_tag);
            }
        }

        info!(
            "corpus built: {} documents, {} words, {} stopwords",
            documents.len(),
            dtm.vocabulary().len(),
            stopwords.len()
        );
        debug!("registered {} keywords", options.keywords.len());

        Self {
            documents,
            dtm,
            annotations,
        }
    }

    /// Sorted vocabulary.
    pub fn vocabulary(&self) -> &[String] {
        self.dtm.vocabulary()
    }

    /// Documents x words counts.
    pub fn matrix(&self) -> &Array2<u32> {
        self.dtm.counts()
    }

    pub fn document_term_matrix(&self) -> &DocumentTermMatrix {
        &self.dtm
    }

    /// Segmented documents, tokens joined by a single space.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }

    pub fn column(&self, word: &str) -> Option<usize> {
        self.dtm.column(word)
    }

    pub fn term_vector(&self, col: usize) -> ArrayView1<'_, u32> {
        self.dtm.term_vector(col)
    }

    pub fn document_count(&self) -> usize {
        self.dtm.document_count()
    }
}

fn record_tag(annotations: &mut Annotations, word: String, tag: &str) {
    let tags = annotations.entry(word).or_default();
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
