#![forbid(unsafe_code)]
//! # word_network
//!
//! Turn a collection of text documents into weighted, undirected word graphs.
//!
//! - [`Corpus`] segments each line with a [`Segmenter`], removes stopwords and
//!   builds a document-term matrix over the sorted vocabulary.
//! - [`word_network`] connects every pair of words by cosine similarity or by
//!   the number of documents they share.
//! - [`onegram_network`] connects words that stand next to each other.
//! - [`keyword_similarity_network`] and [`keyword_cooccurrence_network`] build
//!   networks over a chosen keyword set or over author keyword lists.
//!
//! ## Example
//! ```
//! use word_network::*;
//!
//! let mut segmenter = DictSegmenter::new();
//! let stop = StopwordFilter::from_words(["the"]);
//! let corpus = Corpus::with_stopwords(
//!     &mut segmenter,
//!     &["the cat sat", "the dog sat"],
//!     &CorpusOptions::default(),
//!     &stop,
//! );
//! let graph = word_network(&corpus, &NetworkOptions::default()).unwrap();
//! assert_eq!(graph.weight("cat", "sat"), Some(Weight::Count(1)));
//! assert_eq!(graph.weight("cat", "dog"), None);
//! ```

mod corpus;
mod error;
mod export;
mod graph;
mod input;
mod keyword;
mod network;
mod segment;
mod similarity;
mod stopwords;

pub use corpus::{Annotations, Corpus, CorpusOptions, DocumentTermMatrix};
pub use error::{NetworkError, Result};
pub use export::{ExportFormat, csv_safe_cell, render};
pub use graph::{Edge, GraphSummary, Weight, WeightedGraph};
pub use input::{collect_files, parse_keyword_list, read_documents, read_keywords};
pub use keyword::{KeywordSelection, keyword_cooccurrence_network, keyword_similarity_network};
pub use network::{
    NetworkOptions, OneGramNetwork, UndefinedSimilarity, WeightStrategy, WordNetwork,
    adjacency_matrix, onegram_network, word_network,
};
pub use segment::{DEFAULT_USER_TAG, DictSegmenter, Segmenter, Token};
pub use similarity::{UNDEFINED_SIMILARITY, cooccurrence_count, cosine, cosine_similarity};
pub use stopwords::StopwordFilter;
