use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::provider::FsProvider;

#[derive(Default)]
struct MemoryTree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

/// In-memory provider. Paths are compared literally, no normalization.
#[derive(Clone, Default)]
pub struct MemoryFsProvider {
    tree: Arc<Mutex<MemoryTree>>,
}

impl MemoryFsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file directly, registering its parent directories.
    pub fn insert_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut tree = self.lock()?;
        if let Some(parent) = path.parent() {
            register_dirs(&mut tree, parent);
        }
        tree.files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    /// Contents of a stored file.
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().ok()?.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.lock().map(|t| t.dirs.contains(path)).unwrap_or(false)
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, MemoryTree>> {
        self.tree
            .lock()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))
    }
}

fn register_dirs(tree: &mut MemoryTree, dir: &Path) {
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        tree.dirs.insert(ancestor.to_path_buf());
    }
}

fn parent_exists(tree: &MemoryTree, path: &Path) -> bool {
    match path.parent() {
        None => true,
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => tree.dirs.contains(parent),
    }
}

impl FsProvider for MemoryFsProvider {
    fn list_entries(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(tree) = self.lock() else {
            return Vec::new();
        };
        if !tree.dirs.contains(dir) {
            tracing::debug!("Cannot enumerate {}: no such directory", dir.display());
            return Vec::new();
        }
        tree.files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect()
    }

    fn create_directory(&self, dir: &Path) -> io::Result<()> {
        let mut tree = self.lock()?;
        if tree.files.contains_key(dir) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", dir.display()),
            ));
        }
        register_dirs(&mut tree, dir);
        Ok(())
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let tree = self.lock()?;
        let data = tree.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })?;
        Ok(Box::new(Cursor::new(data)))
    }

    fn create_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let mut tree = self.lock()?;
        if tree.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a directory", path.display()),
            ));
        }
        if !parent_exists(&tree, path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent of {} does not exist", path.display()),
            ));
        }
        tree.files.insert(path.to_path_buf(), Vec::new());
        Ok(Box::new(MemoryWriter {
            path: path.to_path_buf(),
            tree: Arc::clone(&self.tree),
        }))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Appends straight into the shared tree on every write.
struct MemoryWriter {
    path: PathBuf,
    tree: Arc<Mutex<MemoryTree>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut tree = self
            .tree
            .lock()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;
        tree.files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
