//! Rendering a graph as text, CSV/TSV edge list or JSON.
//!
//! Output is returned as a `String`; the CLI prints it. Nothing is written to disk.

use std::fmt::Write as _;

use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;

use crate::error::Result;
use crate::graph::{GraphSummary, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

///Neutralize spreadsheet formulas: prefix `'` to cells starting with `=`, `+`, `-` or `@`.
/// A cell that already starts with `'` is returned unchanged.
/// # Example
/// ```
/// use word_network::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("word".to_string()), "word");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a GraphSummary,
    dropped_keywords: &'a [String],
    #[serde(flatten)]
    graph: &'a WeightedGraph,
}

/// Render `graph` in `format`. `dropped` lists keywords left out of the graph;
/// `top` bounds the heaviest-edge list of the text and JSON summaries.
pub fn render(
    graph: &WeightedGraph,
    dropped: &[String],
    format: ExportFormat,
    top: usize,
) -> Result<String> {
    match format {
        ExportFormat::Txt => Ok(render_txt(graph, dropped, top)),
        ExportFormat::Csv => render_delimited(graph, b','),
        ExportFormat::Tsv => render_delimited(graph, b'\t'),
        ExportFormat::Json => {
            let summary = graph.summary(top);
            let report = JsonReport {
                summary: &summary,
                dropped_keywords: dropped,
                graph,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn render_delimited(graph: &WeightedGraph, delimiter: u8) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    wtr.write_record(["source", "target", "weight"])?;
    for edge in graph.edges() {
        // weights can be negative; only the word cells are sanitized
        wtr.write_record([
            csv_safe_cell(edge.source),
            csv_safe_cell(edge.target),
            edge.weight.to_string(),
        ])?;
    }
    let buf = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_txt(graph: &WeightedGraph, dropped: &[String], top: usize) -> String {
    let s = graph.summary(top);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Nodes: {}  Edges: {}  Isolated: {}  Density: {:.4}  Total weight: {}",
        s.nodes, s.edges, s.isolated, s.density, s.total_weight
    );
    if !dropped.is_empty() {
        let _ = writeln!(out, "Dropped keywords: {}", dropped.join(", "));
    }
    let _ = writeln!(out, "\nTop {} edges:", top);
    for edge in &s.top_edges {
        let _ = writeln!(out, "  {} -- {}\t{}", edge.source, edge.target, edge.weight);
    }
    let _ = writeln!(out, "\nAll edges:");
    for edge in graph.edges() {
        let _ = writeln!(out, "  {}\t{}\t{}", edge.source, edge.target, edge.weight);
    }
    out
}
