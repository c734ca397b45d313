// file: src/input/mod.rs
// version: 1.0.0
// guid: f2616077-b90f-4d65-861d-0409a04165bc

//! Line input from stdin and named files
//!
//! Files are opened lazily and read in the order given. A missing file list
//! or a `-` entry means standard input.

use crate::error::{BackfillError, Result};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Name that selects standard input
pub const STDIN_NAME: &str = "-";

/// One place history lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map positional arguments to sources, defaulting to stdin
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path.as_path() == Path::new(STDIN_NAME) {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// Display name used in error messages
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    async fn open(&self) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
            Self::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|source| BackfillError::Input {
                        path: self.name(),
                        source,
                    })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Reads lines across several sources, one after another
pub struct LineReader {
    sources: Vec<InputSource>,
    next_source: usize,
    current: Option<Box<dyn AsyncBufRead + Unpin + Send>>,
    buf: Vec<u8>,
}

impl LineReader {
    /// Create a reader over the given sources
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            sources,
            next_source: 0,
            current: None,
            buf: Vec::new(),
        }
    }

    /// Next line as raw bytes including its terminator, or `None` once every
    /// source is exhausted
    pub async fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        loop {
            if self.current.is_none() {
                let Some(source) = self.sources.get(self.next_source) else {
                    return Ok(None);
                };
                self.current = Some(source.open().await?);
                self.next_source += 1;
            }

            let Some(reader) = self.current.as_mut() else {
                continue;
            };

            self.buf.clear();
            let read = reader
                .read_until(b'\n', &mut self.buf)
                .await
                .map_err(|source| BackfillError::Input {
                    path: self.sources[self.next_source - 1].name(),
                    source,
                })?;

            if read == 0 {
                self.current = None;
                continue;
            }

            return Ok(Some(std::mem::take(&mut self.buf)));
        }
    }
}
