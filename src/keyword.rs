//! Keyword networks: similarity between chosen corpus words, and co-occurrence
//! of author-assigned keyword lists.

use std::collections::HashSet;

use log::{info, warn};
use serde::Serialize;

use crate::corpus::{Corpus, DocumentTermMatrix};
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::network::{NetworkOptions, WeightStrategy, pair_weight, sweep_pairs};

/// Result of [`keyword_similarity_network`].
#[derive(Debug, Clone, Serialize)]
pub struct KeywordSelection {
    /// Keywords found in the vocabulary, in input order. These are the graph's nodes.
    pub kept: Vec<String>,
    /// Keywords missing from the vocabulary.
    pub dropped: Vec<String>,
    pub graph: WeightedGraph,
}

/// Cosine-similarity network restricted to `keywords`.
///
/// A keyword is looked up in its lowercased form, the casing of the
/// vocabulary. Keywords that are absent (filtered as stopwords, or never cut
/// out as a token of their own) are reported in `dropped` and left out of the
/// graph. A keyword repeated under another casing keeps only its first spelling.
/// `options.strategy` is ignored: the weight is always cosine similarity.
pub fn keyword_similarity_network(
    corpus: &Corpus,
    keywords: &[String],
    options: &NetworkOptions,
) -> Result<KeywordSelection> {
    let mut kept = Vec::new();
    let mut columns = Vec::new();
    let mut dropped = Vec::new();
    let mut seen = HashSet::new();

    for keyword in keywords {
        match corpus.column(&keyword.to_lowercase()) {
            Some(col) => {
                if seen.insert(col) {
                    kept.push(keyword.clone());
                    columns.push(col);
                }
            }
            None => dropped.push(keyword.clone()),
        }
    }
    if !dropped.is_empty() {
        warn!(
            "{} keyword(s) not in vocabulary, skipped: {}",
            dropped.len(),
            dropped.join(", ")
        );
    }

    let edges = sweep_pairs(columns.len(), options.parallel, |i, j| {
        pair_weight(
            corpus.term_vector(columns[i]),
            corpus.term_vector(columns[j]),
            WeightStrategy::Similarity,
            options.undefined_similarity,
        )
    })?;

    let mut graph = WeightedGraph::new();
    for keyword in &kept {
        graph.add_node(keyword);
    }
    for (i, j, w) in edges {
        graph.add_edge(&kept[i], &kept[j], w);
    }
    info!(
        "keyword similarity network built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(KeywordSelection {
        kept,
        dropped,
        graph,
    })
}

/// Co-occurrence network over per-document keyword lists.
///
/// Lists go through the same vectorizer as a corpus: keywords are lowercased
/// and a keyword containing whitespace is counted as its separate words.
/// Every keyword is a node. `options.strategy` is ignored: the weight is
/// always the number of shared documents.
pub fn keyword_cooccurrence_network<K: AsRef<str>>(
    documents: &[Vec<K>],
    options: &NetworkOptions,
) -> Result<WeightedGraph> {
    let joined: Vec<String> = documents
        .iter()
        .map(|keywords| {
            keywords
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect();
    let dtm = DocumentTermMatrix::fit(&joined);
    let vocabulary = dtm.vocabulary();

    let edges = sweep_pairs(vocabulary.len(), options.parallel, |i, j| {
        pair_weight(
            dtm.term_vector(i),
            dtm.term_vector(j),
            WeightStrategy::Count,
            options.undefined_similarity,
        )
    })?;

    let mut graph = WeightedGraph::new();
    for keyword in vocabulary {
        graph.add_node(keyword);
    }
    for (i, j, w) in edges {
        graph.add_edge(&vocabulary[i], &vocabulary[j], w);
    }
    info!(
        "keyword co-occurrence network built: {} documents, {} nodes, {} edges",
        documents.len(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
