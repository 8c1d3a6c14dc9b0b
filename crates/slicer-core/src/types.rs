use std::fmt;
use std::path::PathBuf;

/// One chunk file written by a cut or read by a collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub index: u64,
    pub path: PathBuf,
    pub length: u64,
}

impl fmt::Display for ChunkFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({} bytes)", self.index, self.path.display(), self.length)
    }
}

/// Outcome of cutting one source file.
#[derive(Debug, Clone)]
pub struct CutReport {
    pub source: PathBuf,
    pub chunks: Vec<ChunkFile>,
    pub total_bytes: u64,
}

impl CutReport {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Outcome of collecting a chunk folder into one file.
#[derive(Debug, Clone)]
pub struct CollectReport {
    pub output: PathBuf,
    pub chunks: Vec<ChunkFile>,
    pub total_bytes: u64,
}

impl CollectReport {
    /// Leaf name of the rebuilt file.
    pub fn file_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
