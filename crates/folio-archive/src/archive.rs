//! In-memory file map and zip writer.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Component, Path};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// Contents of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Binary(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Errors that can occur while assembling or writing an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Invalid archive path: {0}")]
    InvalidPath(String),

    #[error("Zip operation failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered map of relative paths to payloads.
///
/// Paths use `/` separators and may be nested (`assets/css/style.css`).
/// Adding a path twice replaces the earlier payload in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    entries: Vec<(String, Payload)>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, path: &str, text: impl Into<String>) -> Result<(), ArchiveError> {
        self.insert(path, Payload::Text(text.into()))
    }

    pub fn add_binary(&mut self, path: &str, bytes: Vec<u8>) -> Result<(), ArchiveError> {
        self.insert(path, Payload::Binary(bytes))
    }

    pub fn insert(&mut self, path: &str, payload: Payload) -> Result<(), ArchiveError> {
        let path = normalize(path)?;

        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => *existing = payload,
            None => self.entries.push((path, payload)),
        }

        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&Payload> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, payload)| payload)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total payload size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|(_, payload)| payload.len()).sum()
    }

    /// Write every entry into a deflated zip archive.
    pub fn to_zip(&self) -> Result<Vec<u8>, ArchiveError> {
        tracing::debug!("Creating ZIP file with {} files", self.entries.len());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, payload) in &self.entries {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(payload.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Write every entry below `dir`, creating directories as needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<(), ArchiveError> {
        for (path, payload) in &self.entries {
            let target = dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, payload.as_bytes())?;
        }

        tracing::debug!("Wrote {} files to {}", self.entries.len(), dir.display());
        Ok(())
    }
}

/// Accept relative, non-escaping paths and normalize separators to `/`.
fn normalize(path: &str) -> Result<String, ArchiveError> {
    let unified = path.replace('\\', "/");
    let mut parts = Vec::new();

    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(s) => parts.push(s),
                None => return Err(ArchiveError::InvalidPath(path.to_string())),
            },
            Component::CurDir => {}
            _ => return Err(ArchiveError::InvalidPath(path.to_string())),
        }
    }

    if parts.is_empty() {
        return Err(ArchiveError::InvalidPath(path.to_string()));
    }

    Ok(parts.join("/"))
}
