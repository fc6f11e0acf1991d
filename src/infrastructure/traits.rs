//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing the loader and
//! the menu shell to be tested with in-memory implementations.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Mutex;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Line-oriented user input.
pub trait LineInput {
    /// Next input line without the trailing newline.
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Reads lines from any buffered reader, typically locked stdin.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

// ============================================================
// TEST IMPLEMENTATIONS
// ============================================================

/// Pre-recorded input lines.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// In-memory filesystem holding whole files.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<Vec<(std::path::PathBuf, String)>>,
}

impl MemoryFileSystem {
    pub fn with_file(path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let fs = Self::default();
        fs.insert(path, content);
        fs
    }

    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.retain(|(p, _)| p != path.as_ref());
            files.push((path.as_ref().to_path_buf(), content.into()));
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self
            .files
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "poisoned lock"))?;
        files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|files| files.iter().any(|(p, _)| p == path))
            .unwrap_or(false)
    }
}
