use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use slicer_storage::FsProvider;

use crate::error::{Result, SlicerError};
use crate::naming::chunk_file_name;
use crate::types::{ChunkFile, CutReport};

/// Read-side buffer reused across every chunk of a cut.
const COPY_BUFFER_SIZE: usize = 1024 * 1024;

/// Splits a file into numbered chunks of at most `block_size` bytes.
pub struct Splitter<'a> {
    fs: &'a dyn FsProvider,
    block_size: u64,
    output_dir: PathBuf,
}

impl<'a> Splitter<'a> {
    pub fn new(fs: &'a dyn FsProvider, block_size: u64, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            block_size,
            output_dir: output_dir.into(),
        }
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn cut(&self, input: &Path) -> Result<CutReport> {
        self.cut_with_progress(input, |_| {})
    }

    /// Cut `input`, calling `on_chunk` after each chunk file is complete.
    ///
    /// Chunks are streamed, so memory use does not depend on the block size.
    /// No chunk is written once the input is exhausted: an empty input gives
    /// zero chunks and an exact multiple of the block size gives no trailing
    /// empty chunk.
    pub fn cut_with_progress(
        &self,
        input: &Path,
        mut on_chunk: impl FnMut(&ChunkFile),
    ) -> Result<CutReport> {
        if self.block_size == 0 {
            return Err(SlicerError::InvalidSize("block size must be positive".into()));
        }

        let file = self
            .fs
            .open_read(input)
            .map_err(|source| SlicerError::InputOpen {
                path: input.to_path_buf(),
                source,
            })?;
        let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, file);

        if let Err(e) = self.fs.create_directory(&self.output_dir) {
            tracing::warn!(
                "Could not create output directory {}: {e}",
                self.output_dir.display()
            );
        }

        let name = source_name(input);
        let mut chunks = Vec::new();
        let mut total_bytes = 0u64;

        loop {
            if reader.fill_buf()?.is_empty() {
                break;
            }

            let index = chunks.len() as u64;
            let path = self.output_dir.join(chunk_file_name(&name, index));
            let mut writer = self.fs.create_write(&path)?;
            let length = std::io::copy(&mut (&mut reader).take(self.block_size), &mut writer)?;
            writer.flush()?;

            tracing::debug!("Wrote chunk {index} ({length} bytes) to {}", path.display());

            let chunk = ChunkFile {
                index,
                path,
                length,
            };
            on_chunk(&chunk);
            total_bytes += length;
            chunks.push(chunk);
        }

        tracing::info!(
            "Cut {} into {} chunks ({total_bytes} bytes) under {} [{}]",
            input.display(),
            chunks.len(),
            self.output_dir.display(),
            self.fs.name()
        );

        Ok(CutReport {
            source: input.to_path_buf(),
            chunks,
            total_bytes,
        })
    }
}

/// Input path as text for chunk naming. Bytes that are not UTF-8 become
/// U+FFFD, so the chunk names will not match the input's name.
fn source_name(input: &Path) -> Cow<'_, str> {
    let name = input.to_string_lossy();
    if let Cow::Owned(_) = name {
        tracing::warn!(
            "Input name {} is not valid UTF-8; chunks are named {}",
            input.display(),
            name
        );
    }
    name
}
