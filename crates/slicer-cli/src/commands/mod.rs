pub mod collect;
pub mod config;
pub mod cut;
pub mod init;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use slicer_core::config::SlicerConfig;

/// Config from `<base_dir>/slicer.toml`, or defaults when there is none.
pub fn load_config(base_dir: &Path) -> Result<SlicerConfig> {
    Ok(SlicerConfig::load_from_dir(base_dir)?)
}

pub fn byte_progress(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

pub fn count_progress(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}
