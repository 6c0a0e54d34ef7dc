//! Destinations for finished PDF files.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A finished export: the sanitized filename and the PDF bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Receives the saved PDF. The single place an export touches the outside world.
pub trait ArtifactSink: Send + Sync + Debug {
    fn emit(&self, filename: &str, bytes: &[u8]) -> io::Result<()>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for Arc<S> {
    fn emit(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        (**self).emit(filename, bytes)
    }
}

/// Writes each artifact to `<dir>/<filename>`, creating the directory if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl ArtifactSink for DirectorySink {
    fn emit(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(filename);
        fs::write(&path, bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Mutex<Vec<ExportArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, oldest first.
    pub fn artifacts(&self) -> Vec<ExportArtifact> {
        self.artifacts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<ExportArtifact> {
        self.artifacts().pop()
    }
}

impl ArtifactSink for MemorySink {
    fn emit(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        let mut artifacts = self
            .artifacts
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        artifacts.push(ExportArtifact {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
