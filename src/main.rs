#![forbid(unsafe_code)]
//! # word_network CLI
//!
//! Build a word network from `.txt` documents (one document per line) and
//! print it as a text report, CSV/TSV edge list or JSON.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/data --mode word --weight sim --stopwords stop.txt --export-format csv
//! ```
//!
//! See `--help` for all available options.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::error;
use word_network::{
    Corpus, CorpusOptions, DictSegmenter, ExportFormat, NetworkOptions, UndefinedSimilarity,
    WeightStrategy, keyword_cooccurrence_network, keyword_similarity_network, onegram_network,
    parse_keyword_list, read_documents, read_keywords, render, word_network,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every word pair, weighted by --weight
    Word,
    /// Words standing next to each other
    Onegram,
    /// Cosine similarity between the words listed in --keywords
    KeywordSim,
    /// Co-occurrence of keyword lists (one document per line, separated by ; or ,)
    KeywordCo,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File or directory to analyze
    path: String,

    /// Kind of network to build
    #[arg(long, value_enum, default_value = "word")]
    mode: Mode,

    /// Edge weight for word networks (sim, count)
    #[arg(long, default_value = "count")]
    weight: WeightStrategy,

    /// Optional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Keyword file (.txt, one keyword per line), registered with the segmenter
    #[arg(long, required_if_eq("mode", "keyword-sim"))]
    keywords: Option<PathBuf>,

    /// Collect part-of-speech tags per word and list them in the text report
    #[arg(long, default_value_t = false)]
    track_tags: bool,

    /// Tag given to keywords in the tag listing
    #[arg(long, default_value = "n")]
    keyword_tag: String,

    /// Leave out pairs whose similarity is undefined instead of weighting them -1
    #[arg(long, default_value_t = false)]
    no_edge_on_undefined: bool,

    /// Compute word pairs on all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Output format (txt, csv, tsv, json)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Number of heaviest edges in the summary
    #[arg(long, default_value_t = 20)]
    top: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> word_network::Result<String> {
    let documents = read_documents(Path::new(&cli.path))?;
    let options = NetworkOptions {
        strategy: cli.weight,
        undefined_similarity: if cli.no_edge_on_undefined {
            UndefinedSimilarity::NoEdge
        } else {
            UndefinedSimilarity::Sentinel
        },
        parallel: cli.parallel,
    };

    if cli.mode == Mode::KeywordCo {
        let lists: Vec<Vec<String>> = documents.iter().map(|l| parse_keyword_list(l)).collect();
        let graph = keyword_cooccurrence_network(&lists, &options)?;
        return render(&graph, &[], cli.export_format, cli.top);
    }

    let keywords = match &cli.keywords {
        Some(path) => read_keywords(path)?,
        None => Vec::new(),
    };
    let corpus_options = CorpusOptions {
        keywords: keywords.clone(),
        stopwords: cli.stopwords.clone(),
        track_tags: cli.track_tags,
        keyword_tag: cli.keyword_tag.clone(),
    };
    let mut segmenter = DictSegmenter::new();
    let corpus = Corpus::build(&mut segmenter, &documents, &corpus_options)?;

    let (graph, dropped) = match cli.mode {
        Mode::Word => (word_network(&corpus, &options)?, Vec::new()),
        Mode::Onegram => (onegram_network(&corpus, &options)?, Vec::new()),
        Mode::KeywordSim | Mode::KeywordCo => {
            let selection = keyword_similarity_network(&corpus, &keywords, &options)?;
            (selection.graph, selection.dropped)
        }
    };

    let mut output = render(&graph, &dropped, cli.export_format, cli.top)?;
    if cli.export_format == ExportFormat::Txt {
        if let Some(annotations) = corpus.annotations() {
            let _ = writeln!(output, "\nPart-of-speech tags:");
            for (word, tags) in annotations {
                let _ = writeln!(output, "  {}\t{}", word, tags.join(","));
            }
        }
    }
    Ok(output)
}
