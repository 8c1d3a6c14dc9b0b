use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::provider::FsProvider;

/// Provider backed by the host filesystem.
pub struct LocalFsProvider {
    name: String,
}

impl LocalFsProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Default for LocalFsProvider {
    fn default() -> Self {
        Self::new("local")
    }
}

impl FsProvider for LocalFsProvider {
    fn list_entries(&self, dir: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot enumerate {}: {e}", dir.display());
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| !path.is_dir())
            .collect()
    }

    fn create_directory(&self, dir: &Path) -> io::Result<()> {
        std::fs::create_dir_all(dir)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            ));
        }
        Ok(Box::new(File::open(path)?))
    }

    fn create_write(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_entries_skips_directories() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.bin._0"), b"one").unwrap();
        std::fs::write(tmp.path().join("a.bin._1"), b"two").unwrap();
        std::fs::create_dir(tmp.path().join("nested")).unwrap();

        let provider = LocalFsProvider::default();
        let mut entries = provider.list_entries(tmp.path());
        entries.sort();

        assert_eq!(
            entries,
            vec![tmp.path().join("a.bin._0"), tmp.path().join("a.bin._1")]
        );
    }

    #[test]
    fn list_entries_missing_folder_is_empty() {
        let tmp = TempDir::new().unwrap();
        let provider = LocalFsProvider::default();
        assert!(provider.list_entries(&tmp.path().join("absent")).is_empty());
    }

    #[test]
    fn create_directory_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let provider = LocalFsProvider::default();
        let dir = tmp.path().join("result");

        provider.create_directory(&dir).unwrap();
        provider.create_directory(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn write_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let provider = LocalFsProvider::default();
        let path = tmp.path().join("part");

        let mut writer = provider.create_write(&path).unwrap();
        writer.write_all(b"chunk bytes").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut data = Vec::new();
        provider
            .open_read(&path)
            .unwrap()
            .read_to_end(&mut data)
            .unwrap();
        assert_eq!(data, b"chunk bytes");
    }

    #[test]
    fn open_read_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let provider = LocalFsProvider::default();
        assert!(provider.open_read(tmp.path()).is_err());
    }

    #[test]
    fn open_read_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let provider = LocalFsProvider::default();
        assert!(provider.open_read(&tmp.path().join("nope")).is_err());
    }
}
