//! Parsing of textual tree descriptions.
//!
//! A description is made of a first line containing the number of vertices
//! `n`, followed by exactly `n` lines, one per vertex in id order. Each vertex
//! line is either the [leaf marker](LEAF_MARKER) alone, or a space-separated
//! list of the ids of the children of the vertex. No line may follow the
//! last vertex line, not even an empty one.

mod line;
pub use line::*;

mod token;
pub use token::*;

use crate::graph::Graph;
use dsi_progress_logger::ProgressLog;
use std::collections::TryReserveError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors caused by malformed input.
///
/// All line numbers are 1-based.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read input")]
    Io(#[from] std::io::Error),
    #[error("cannot allocate memory for the graph")]
    Allocation(#[from] TryReserveError),
    #[error("line {line}, column {column}: invalid byte 0x{byte:02x}")]
    InvalidCharacter { line: usize, column: usize, byte: u8 },
    #[error("line {line}: longer than {max} bytes")]
    LineTooLong { line: usize, max: usize },
    #[error("line {line}: unexpected end of input")]
    UnexpectedEof { line: usize },
    #[error("line {line}: no tokens")]
    EmptyLine { line: usize },
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: the number of vertices must be the only token")]
    ExtraTokens { line: usize },
    #[error("line {line}: the leaf marker must be the only token")]
    MisplacedLeafMarker { line: usize },
    #[error("line {line}: vertex {id} is out of range for {num_vertices} vertices")]
    OutOfRange {
        line: usize,
        id: usize,
        num_vertices: usize,
    },
    #[error("line {line}: unexpected content after the last vertex")]
    TrailingContent { line: usize },
}

/// Builds a [`Graph`] from a textual description.
///
/// # Examples
/// ```
/// # use tree_analyzer::parser::GraphReader;
/// # use dsi_progress_logger::no_logging;
/// let graph = GraphReader::new("4\n1 2\n-\n3\n-\n".as_bytes())
///     .read(no_logging![])
///     .unwrap();
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert_eq!(graph.children(0), &[1, 2]);
/// ```
pub struct GraphReader<R> {
    lines: LineReader<R>,
}

impl GraphReader<BufReader<File>> {
    /// Opens the file at `path` for reading.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> GraphReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
        }
    }

    /// Sets the maximum length of a line, terminator excluded.
    ///
    /// The default is [`DEFAULT_MAX_LINE_LEN`].
    pub fn max_line_len(self, max_line_len: usize) -> Self {
        Self {
            lines: self.lines.max_line_len(max_line_len),
        }
    }

    /// Reads the whole description and returns the resulting graph.
    ///
    /// Parsing stops at the first error; the partially built graph is
    /// dropped.
    pub fn read(mut self, pl: &mut impl ProgressLog) -> Result<Graph, InputError> {
        let num_vertices = self.read_num_vertices()?;
        let mut graph = Graph::with_num_vertices(num_vertices)?;

        pl.item_name("vertex");
        pl.expected_updates(Some(num_vertices));
        pl.start("Reading vertex descriptions...");

        let mut scratch = Vec::new();
        for vertex in 0..num_vertices {
            let children = self.read_children(num_vertices, &mut scratch)?;
            graph.set_children(vertex, children);
            pl.light_update();
        }

        // The terminator of the last vertex line is consumed with it, so
        // anything left, even a bare line feed, is an extra line.
        if self.lines.next_line()?.is_some() {
            return Err(InputError::TrailingContent {
                line: self.lines.line_number(),
            });
        }

        pl.done();
        pl.info(format_args!(
            "Read {} vertices and {} edges",
            graph.num_vertices(),
            graph.num_edges()
        ));
        Ok(graph)
    }

    fn next_line(&mut self) -> Result<&str, InputError> {
        let expected = self.lines.line_number() + 1;
        self.lines
            .next_line()?
            .ok_or(InputError::UnexpectedEof { line: expected })
    }

    fn read_num_vertices(&mut self) -> Result<usize, InputError> {
        let line_number = self.lines.line_number() + 1;
        let line = self.next_line()?;
        let mut tokens = line.split_ascii_whitespace();

        let num_vertices = match tokens.next().map(|token| (token, parse_token(token))) {
            None => return Err(InputError::EmptyLine { line: line_number }),
            Some((_, Token::Value(num_vertices))) => num_vertices,
            Some((token, _)) => {
                return Err(InputError::InvalidNumber {
                    line: line_number,
                    token: token.to_owned(),
                })
            }
        };

        if tokens.next().is_some() {
            return Err(InputError::ExtraTokens { line: line_number });
        }

        Ok(num_vertices)
    }

    /// Reads the children of the next vertex, using `scratch` to
    /// accumulate ids.
    fn read_children(
        &mut self,
        num_vertices: usize,
        scratch: &mut Vec<usize>,
    ) -> Result<Box<[usize]>, InputError> {
        let line_number = self.lines.line_number() + 1;
        let line = self.next_line()?;
        let mut tokens = line.split_ascii_whitespace().peekable();

        match tokens.peek().map(|token| parse_token(token)) {
            None => return Err(InputError::EmptyLine { line: line_number }),
            Some(Token::LeafMarker) => {
                tokens.next();
                return if tokens.next().is_none() {
                    Ok(Box::default())
                } else {
                    Err(InputError::MisplacedLeafMarker { line: line_number })
                };
            }
            Some(_) => {}
        }

        scratch.clear();
        for token in tokens {
            match parse_token(token) {
                Token::Value(id) if id < num_vertices => scratch.push(id),
                Token::Value(id) => {
                    return Err(InputError::OutOfRange {
                        line: line_number,
                        id,
                        num_vertices,
                    })
                }
                Token::LeafMarker => {
                    return Err(InputError::MisplacedLeafMarker { line: line_number })
                }
                Token::Invalid => {
                    return Err(InputError::InvalidNumber {
                        line: line_number,
                        token: token.to_owned(),
                    })
                }
            }
        }

        let mut children = Vec::new();
        children.try_reserve_exact(scratch.len())?;
        children.extend_from_slice(scratch);
        Ok(children.into_boxed_slice())
    }
}
