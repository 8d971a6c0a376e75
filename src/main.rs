use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use std::process::ExitCode;
use std::str::FromStr;
use thiserror::Error;
use tree_analyzer::algo::{parse_vertex, Analysis, QueryError, TreeError};
use tree_analyzer::graph::Tree;
use tree_analyzer::parser::{GraphReader, InputError, DEFAULT_MAX_LINE_LEN};

const USAGE_MSG: &str = "Usage: TreeAnalyzer <Graph File Path> <First Vertex> <Second Vertex>";
const INVALID_INPUT_MSG: &str = "Invalid input";
const NOT_A_TREE_MSG: &str = "The given graph is not a tree";

/// Verbosity of `stderrlog` (0 = errors only).
const VERBOSITY_VAR: &str = "TREE_ANALYZER_VERBOSITY";
const MAX_LINE_LEN_VAR: &str = "TREE_ANALYZER_MAX_LINE_LEN";

#[derive(Error, Debug)]
#[error("expected 3 arguments, got {0}")]
struct UsageError(usize);

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn run(args: &[String]) -> Result<Analysis> {
    let [path, first, second] = args else {
        return Err(UsageError(args.len()).into());
    };

    let mut pl = progress_logger![display_memory = true];
    let graph = GraphReader::from_path(path)
        .and_then(|reader| {
            reader
                .max_line_len(env_or(MAX_LINE_LEN_VAR, DEFAULT_MAX_LINE_LEN))
                .read(&mut pl)
        })
        .with_context(|| format!("Cannot read graph from {path}"))?;

    let first = parse_vertex(first, graph.num_vertices()).context("Invalid first vertex")?;
    let second = parse_vertex(second, graph.num_vertices()).context("Invalid second vertex")?;

    let tree = Tree::from_graph(graph, &mut pl).context("Invalid graph")?;
    pl.info(format_args!("Tree rooted at vertex {}", tree.root()));

    Ok(Analysis::compute(&tree, first, second, &mut pl)?)
}

/// Maps an error to the fixed message of its class.
fn message(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<UsageError>().is_some() {
        USAGE_MSG
    } else if err.downcast_ref::<TreeError>().is_some() {
        NOT_A_TREE_MSG
    } else if err.downcast_ref::<InputError>().is_some()
        || err.downcast_ref::<QueryError>().is_some()
    {
        INVALID_INPUT_MSG
    } else {
        log::warn!("Unclassified error: {err}");
        INVALID_INPUT_MSG
    }
}

fn main() -> ExitCode {
    if let Err(err) = stderrlog::new()
        .verbosity(env_or(VERBOSITY_VAR, 0usize))
        .timestamp(stderrlog::Timestamp::Second)
        .init()
    {
        eprintln!("Cannot initialize logging: {err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(analysis) => {
            println!("{analysis}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{err:#}");
            eprintln!("{}", message(&err));
            ExitCode::FAILURE
        }
    }
}
