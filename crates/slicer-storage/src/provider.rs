use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Filesystem capabilities needed to cut and collect chunk files.
pub trait FsProvider: Send + Sync {
    /// List the full paths of every entry in `dir` that is not a directory.
    ///
    /// Order is whatever the backend enumerates in. A folder that cannot be
    /// opened yields an empty list.
    fn list_entries(&self, dir: &Path) -> Vec<PathBuf>;

    /// Create `dir` and any missing parents. Succeeds if it already exists.
    fn create_directory(&self, dir: &Path) -> io::Result<()>;

    /// Open a file for reading.
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;

    /// Create (or truncate) a file for writing.
    fn create_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>>;

    /// Provider name for display.
    fn name(&self) -> &str;
}
