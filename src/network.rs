//! Word networks built from a [`Corpus`]: pairwise (similarity or co-occurrence)
//! and adjacent-word (1-gram) networks.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

use crate::corpus::{Corpus, CorpusOptions};
use crate::error::{NetworkError, Result};
use crate::graph::{Weight, WeightedGraph};
use crate::segment::DictSegmenter;
use crate::similarity::{UNDEFINED_SIMILARITY, cooccurrence_count, cosine};

/// How the weight of a word pair is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightStrategy {
    /// Cosine similarity of the per-document count vectors.
    Similarity,
    /// Number of documents containing both words.
    #[default]
    Count,
}

impl FromStr for WeightStrategy {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sim" | "similarity" | "cosine" => Ok(WeightStrategy::Similarity),
            "count" | "co-occurrence" | "cooccurrence" => Ok(WeightStrategy::Count),
            _ => Err(NetworkError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for WeightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightStrategy::Similarity => f.write_str("sim"),
            WeightStrategy::Count => f.write_str("count"),
        }
    }
}

/// What to do with a pair whose cosine similarity is undefined (a zero vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedSimilarity {
    /// Keep the pair as an edge weighted -1.
    #[default]
    Sentinel,
    /// Leave the pair out.
    NoEdge,
}

/// Options shared by all network builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkOptions {
    pub strategy: WeightStrategy,
    pub undefined_similarity: UndefinedSimilarity,
    /// Sweep pair rows on the rayon pool. Output is identical to the sequential sweep.
    pub parallel: bool,
}

/// Weight of one pair under `strategy`, `None` if the pair gets no edge.
pub(crate) fn pair_weight(
    a: ArrayView1<'_, u32>,
    b: ArrayView1<'_, u32>,
    strategy: WeightStrategy,
    undefined: UndefinedSimilarity,
) -> Result<Option<Weight>> {
    match strategy {
        WeightStrategy::Similarity => Ok(match cosine(a, b)? {
            Some(s) if s != 0.0 => Some(Weight::Similarity(s)),
            Some(_) => None,
            None => match undefined {
                UndefinedSimilarity::Sentinel => Some(Weight::Similarity(UNDEFINED_SIMILARITY)),
                UndefinedSimilarity::NoEdge => None,
            },
        }),
        WeightStrategy::Count => {
            let c = cooccurrence_count(a, b)?;
            Ok((c > 0).then_some(Weight::Count(c)))
        }
    }
}

/// Visit every pair `i < j` below `n` and keep the ones `weigh` returns a weight for.
///
/// Edges come back ordered by `i`, then `j`, whether or not `parallel` is set.
pub(crate) fn sweep_pairs<F>(n: usize, parallel: bool, weigh: F) -> Result<Vec<(usize, usize, Weight)>>
where
    F: Fn(usize, usize) -> Result<Option<Weight>> + Sync,
{
    let row = |i: usize| -> Result<Vec<(usize, usize, Weight)>> {
        let mut out = Vec::new();
        for j in i + 1..n {
            if let Some(w) = weigh(i, j)? {
                out.push((i, j, w));
            }
        }
        Ok(out)
    };
    let rows: Vec<Vec<_>> = if parallel {
        (0..n).into_par_iter().map(|i| row(i)).collect::<Result<_>>()?
    } else {
        (0..n).map(row).collect::<Result<_>>()?
    };
    Ok(rows.into_iter().flatten().collect())
}

/// Graph over the whole vocabulary, weighted by `options.strategy`.
///
/// Every vocabulary word becomes a node, isolated or not.
pub fn word_network(corpus: &Corpus, options: &NetworkOptions) -> Result<WeightedGraph> {
    let vocabulary = corpus.vocabulary();
    debug!(
        "word network: {} words x {} documents, strategy {}",
        vocabulary.len(),
        corpus.document_count(),
        options.strategy
    );
    let edges = sweep_pairs(vocabulary.len(), options.parallel, |i, j| {
        pair_weight(
            corpus.term_vector(i),
            corpus.term_vector(j),
            options.strategy,
            options.undefined_similarity,
        )
    })?;

    let mut graph = WeightedGraph::new();
    for word in vocabulary {
        graph.add_node(word);
    }
    for (i, j, w) in edges {
        graph.add_edge(&vocabulary[i], &vocabulary[j], w);
    }
    info!(
        "word network built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Counts of `head` immediately followed by `tail`, indexed by vocabulary column.
pub fn adjacency_matrix(corpus: &Corpus) -> Array2<u32> {
    let n = corpus.vocabulary().len();
    let mut adjacency = Array2::<u32>::zeros((n, n));
    for doc in corpus.documents() {
        // vocabulary is lowercased, so the tokens must be too
        let columns: Vec<usize> = doc
            .split_whitespace()
            .filter_map(|t| corpus.column(&t.to_lowercase()))
            .collect();
        for pair in columns.windows(2) {
            adjacency[[pair[0], pair[1]]] += 1;
        }
    }
    adjacency
}

/// Bigram network: words that appear next to each other, in either order.
///
/// Only words with at least one edge appear as nodes.
pub fn onegram_network(corpus: &Corpus, options: &NetworkOptions) -> Result<WeightedGraph> {
    let vocabulary = corpus.vocabulary();
    let adjacency = adjacency_matrix(corpus);
    let edges = sweep_pairs(vocabulary.len(), options.parallel, |i, j| {
        let w = u64::from(adjacency[[i, j]]) + u64::from(adjacency[[j, i]]);
        Ok((w > 0).then_some(Weight::Count(w)))
    })?;

    let mut graph = WeightedGraph::new();
    for (i, j, w) in edges {
        graph.add_edge(&vocabulary[i], &vocabulary[j], w);
    }
    info!(
        "1-gram network built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Corpus and word network built together from raw lines.
#[derive(Debug, Clone)]
pub struct WordNetwork {
    corpus: Corpus,
    graph: WeightedGraph,
}

impl WordNetwork {
    /// Segment `lines` with a [`DictSegmenter`] and build the pairwise network.
    ///
    /// `weight_type` is parsed before any work is done, so a bad name fails fast.
    pub fn from_text<L: AsRef<str>>(
        lines: &[L],
        corpus_options: &CorpusOptions,
        weight_type: &str,
    ) -> Result<Self> {
        let strategy: WeightStrategy = weight_type.parse()?;
        let mut segmenter = DictSegmenter::new();
        let corpus = Corpus::build(&mut segmenter, lines, corpus_options)?;
        let options = NetworkOptions {
            strategy,
            ..NetworkOptions::default()
        };
        let graph = word_network(&corpus, &options)?;
        Ok(Self { corpus, graph })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }
}

/// Corpus and 1-gram network built together from raw lines.
#[derive(Debug, Clone)]
pub struct OneGramNetwork {
    corpus: Corpus,
    graph: WeightedGraph,
}

impl OneGramNetwork {
    pub fn from_text<L: AsRef<str>>(lines: &[L], corpus_options: &CorpusOptions) -> Result<Self> {
        let mut segmenter = DictSegmenter::new();
        let corpus = Corpus::build(&mut segmenter, lines, corpus_options)?;
        let graph = onegram_network(&corpus, &NetworkOptions::default())?;
        Ok(Self { corpus, graph })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }
}
