//! Directory-backed document corpora
//!
//! A corpus is one directory per class. Every regular file directly inside
//! it is one document. Files are read on the rayon pool; an entry that
//! cannot be inspected or read becomes an `Error::Document` item so the
//! trainer and evaluator skip it. Only a directory that cannot be listed at
//! all is fatal.

use clap::ValueEnum;
use rayon::prelude::*;
use spamfilter_core::{Error, Label, LabeledDocument, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How raw file bytes are turned into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// ISO-8859-1: every byte maps to the code point of the same value
    #[default]
    Latin1,
    /// UTF-8, invalid sequences replaced with U+FFFD
    Utf8,
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// All documents of one class stored in a directory
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    dir: PathBuf,
    label: Label,
    encoding: Encoding,
}

impl DirectoryCorpus {
    pub fn new(dir: impl Into<PathBuf>, label: Label) -> Self {
        Self {
            dir: dir.into(),
            label,
            encoding: Encoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Regular files in the directory, sorted by path, followed by one
    /// `Error::Document` per entry that could not be inspected.
    ///
    /// Fails only if the directory itself cannot be listed.
    pub fn paths(&self) -> Result<Vec<Result<PathBuf>>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            Error::config(format!(
                "cannot list {} corpus {}: {}",
                self.label,
                self.dir.display(),
                e
            ))
        })?;

        let mut paths = Vec::new();
        let mut failures = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    failures.push(Error::document(self.dir.display().to_string(), e));
                    continue;
                }
            };
            // Follows symlinks, so a dangling link is reported rather than dropped.
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => failures.push(Error::document(path.display().to_string(), e)),
            }
        }
        paths.sort();

        debug!(
            "Found {} {} documents in {} ({} unreadable entries)",
            paths.len(),
            self.label,
            self.dir.display(),
            failures.len()
        );
        Ok(paths
            .into_iter()
            .map(Ok)
            .chain(failures.into_iter().map(Err))
            .collect())
    }

    /// Read every document; unreadable files become per-document errors
    pub fn load(&self) -> Result<Vec<Result<LabeledDocument>>> {
        let documents = self
            .paths()?
            .into_par_iter()
            .map(|path| read_document(&path?, self.label, self.encoding))
            .collect();
        Ok(documents)
    }
}

/// Read and decode the text of a file
pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::document(path.display().to_string(), e))?;
    Ok(encoding.decode(&bytes))
}

/// Read a single labeled document
pub fn read_document(path: &Path, label: Label, encoding: Encoding) -> Result<LabeledDocument> {
    let text = read_text(path, encoding)?;
    Ok(LabeledDocument::new(text, label).with_source(path.display().to_string()))
}

/// Load several corpora into one document list
pub fn load_all(corpora: &[DirectoryCorpus]) -> Result<Vec<Result<LabeledDocument>>> {
    let mut documents = Vec::new();
    for corpus in corpora {
        documents.extend(corpus.load()?);
    }
    Ok(documents)
}
