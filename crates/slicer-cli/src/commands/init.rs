use anyhow::Result;
use std::path::Path;

use slicer_core::config::SlicerConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    println!("Initializing slicer in {}", base_dir.display());

    let config_path = SlicerConfig::file_in(base_dir);
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        // Surface a broken file now rather than on the next cut.
        SlicerConfig::load(&config_path)?;
    } else {
        SlicerConfig::default().create_in(base_dir)?;
        println!("Created config: {}", config_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Adjust block_size or output_dir in {}", config_path.display());
    println!("  2. Run `slicer CUT <file>` to split a file");

    Ok(())
}
