use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use slicer_storage::FsProvider;

use crate::error::{Result, SlicerError};
use crate::naming::{ChunkName, leaf_name, parse_chunk_name};
use crate::types::{ChunkFile, CollectReport};

/// Chunk files of one source file, in join order.
#[derive(Debug, Clone)]
pub struct CollectPlan {
    pub folder: PathBuf,
    /// Leaf name of the file the chunks were cut from.
    pub original: String,
    pub chunks: Vec<(u64, PathBuf)>,
}

/// Joins chunk files back into the files they were cut from.
pub struct Joiner<'a> {
    fs: &'a dyn FsProvider,
    dest_dir: PathBuf,
}

impl<'a> Joiner<'a> {
    pub fn new(fs: &'a dyn FsProvider, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dest_dir: dest_dir.into(),
        }
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Rebuild every source file whose chunks are in `folder`.
    pub fn collect(&self, folder: &Path) -> Result<Vec<CollectReport>> {
        self.plan(folder)?
            .iter()
            .map(|plan| self.execute(plan, |_| {}))
            .collect()
    }

    /// List `folder` and group its chunk files by the file they were cut from.
    ///
    /// Groups come back sorted by source name, each ordered by numeric index
    /// so `._10` sorts after `._9`. Entries that are not chunk files are
    /// skipped.
    pub fn plan(&self, folder: &Path) -> Result<Vec<CollectPlan>> {
        let entries = self.fs.list_entries(folder);
        if entries.is_empty() {
            return Err(SlicerError::NoChunks(folder.to_path_buf()));
        }

        let mut groups: BTreeMap<String, Vec<(u64, PathBuf)>> = BTreeMap::new();
        for path in entries {
            let parsed = {
                let leaf = path.to_string_lossy();
                if matches!(leaf, Cow::Owned(_)) {
                    tracing::warn!("Chunk name {} is not valid UTF-8", path.display());
                }
                parse_chunk_name(leaf_name(&leaf))
            };
            match parsed {
                Some(ChunkName { original, index }) => {
                    groups.entry(original).or_default().push((index, path))
                }
                None => tracing::warn!("Skipping {}: not a chunk file", path.display()),
            }
        }
        if groups.is_empty() {
            return Err(SlicerError::NoChunks(folder.to_path_buf()));
        }

        let plans = groups
            .into_iter()
            .map(|(original, mut chunks)| {
                chunks.sort();
                warn_on_gaps(&original, &chunks);
                CollectPlan {
                    folder: folder.to_path_buf(),
                    original,
                    chunks,
                }
            })
            .collect();
        Ok(plans)
    }

    /// Concatenate the planned chunks into `<dest_dir>/<original>`.
    ///
    /// An existing file at that path is overwritten.
    pub fn execute(
        &self,
        plan: &CollectPlan,
        mut on_chunk: impl FnMut(&ChunkFile),
    ) -> Result<CollectReport> {
        if let Err(e) = self.fs.create_directory(&self.dest_dir) {
            tracing::warn!(
                "Could not create destination directory {}: {e}",
                self.dest_dir.display()
            );
        }

        let output = self.dest_dir.join(&plan.original);
        let mut writer = self.fs.create_write(&output)?;
        let mut chunks = Vec::with_capacity(plan.chunks.len());
        let mut total_bytes = 0u64;

        for (index, path) in &plan.chunks {
            let mut reader = self.fs.open_read(path)?;
            let length = std::io::copy(&mut reader, &mut writer)?;
            tracing::debug!("Appended chunk {index} ({length} bytes) from {}", path.display());

            let chunk = ChunkFile {
                index: *index,
                path: path.clone(),
                length,
            };
            on_chunk(&chunk);
            total_bytes += length;
            chunks.push(chunk);
        }
        writer.flush()?;

        tracing::info!(
            "Collected {} chunks from {} into {} ({total_bytes} bytes) [{}]",
            chunks.len(),
            plan.folder.display(),
            output.display(),
            self.fs.name()
        );

        Ok(CollectReport {
            output,
            chunks,
            total_bytes,
        })
    }
}

fn warn_on_gaps(original: &str, chunks: &[(u64, PathBuf)]) {
    for (expected, (index, path)) in chunks.iter().enumerate() {
        if *index != expected as u64 {
            tracing::warn!(
                "Chunks of '{original}' are not contiguous: expected index {expected}, found {index} ({})",
                path.display()
            );
            break;
        }
    }
}
