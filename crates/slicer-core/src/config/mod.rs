use crate::error::{Result, SlicerError};
use crate::units::{DEFAULT_BLOCK_SIZE, parse_size};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlicerConfig {
    #[serde(default)]
    pub slicer: SlicerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlicerSettings {
    /// Maximum bytes per chunk. Accepts an integer or a string like "512M".
    #[serde(
        default = "default_block_size",
        deserialize_with = "deserialize_block_size"
    )]
    pub block_size: u64,
    /// Directory chunk files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Directory rebuilt files are written to.
    #[serde(default = "default_dest_dir")]
    pub dest_dir: String,
}

impl Default for SlicerSettings {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            output_dir: default_output_dir(),
            dest_dir: default_dest_dir(),
        }
    }
}

fn default_block_size() -> u64 {
    DEFAULT_BLOCK_SIZE
}

fn default_output_dir() -> String {
    "result".to_string()
}

fn default_dest_dir() -> String {
    ".".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Bytes(u64),
    Text(String),
}

fn deserialize_block_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeValue::deserialize(deserializer)? {
        SizeValue::Bytes(n) => Ok(n),
        SizeValue::Text(s) => parse_size(&s).map_err(serde::de::Error::custom),
    }
}

/// File name of the config inside its directory.
pub const CONFIG_FILE_NAME: &str = "slicer.toml";

const CONFIG_HEADER: &str = "\
# slicer configuration
# block_size takes a byte count or a size such as \"512M\" or \"1G\".
";

/// The config directory: `explicit` when given, `~/.slicer` otherwise.
pub fn config_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let home = dirs::home_dir()
        .ok_or_else(|| SlicerError::Config("no home directory for ~/.slicer".into()))?;
    Ok(home.join(".slicer"))
}

impl SlicerConfig {
    /// Path of the config file kept in `dir`.
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SlicerError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| SlicerError::TomlDe(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file, falling back to defaults if it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(SlicerError::ConfigNotFound(_)) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Config kept in `dir`, or defaults when the directory has none.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_or_default(&Self::file_in(dir))
    }

    /// Validate and write a fresh config file into `dir`.
    ///
    /// Never replaces an existing file; returns the path written.
    pub fn create_in(&self, dir: &Path) -> Result<PathBuf> {
        self.validate()?;
        let body =
            toml::to_string_pretty(self).map_err(|e| SlicerError::TomlSer(e.to_string()))?;

        std::fs::create_dir_all(dir)?;
        let path = Self::file_in(dir);
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(SlicerError::Config(format!(
                    "{} already exists",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(CONFIG_HEADER.as_bytes())?;
        file.write_all(body.as_bytes())?;
        Ok(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slicer.block_size == 0 {
            return Err(SlicerError::InvalidSize("block_size must be positive".into()));
        }
        if self.slicer.output_dir.trim().is_empty() {
            return Err(SlicerError::Config("output_dir must not be empty".into()));
        }
        if self.slicer.dest_dir.trim().is_empty() {
            return Err(SlicerError::Config("dest_dir must not be empty".into()));
        }
        Ok(())
    }
}
