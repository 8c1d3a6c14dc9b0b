use anyhow::Result;
use std::path::Path;

use slicer_core::config::SlicerConfig;
use slicer_core::units::format_bytes;

use super::load_config;

pub fn run(base_dir: &Path) -> Result<()> {
    let config_path = SlicerConfig::file_in(base_dir);
    let config = load_config(base_dir)?;

    if config_path.exists() {
        println!("Config: {}", config_path.display());
    } else {
        println!("Config: {} (not found, using defaults)", config_path.display());
    }
    println!();
    println!(
        "  Block size:     {} ({} bytes)",
        format_bytes(config.slicer.block_size),
        config.slicer.block_size
    );
    println!("  Output dir:     {}", config.slicer.output_dir);
    println!("  Dest dir:       {}", config.slicer.dest_dir);

    Ok(())
}
