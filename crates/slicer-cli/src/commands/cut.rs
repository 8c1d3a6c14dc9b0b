use anyhow::Result;
use std::path::Path;

use slicer_core::cut::Splitter;
use slicer_core::units::format_bytes;
use slicer_storage::LocalFsProvider;

use super::{byte_progress, load_config};

pub fn run(
    source: &Path,
    base_dir: &Path,
    block_size: Option<u64>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let config = load_config(base_dir)?;
    let block_size = block_size.unwrap_or(config.slicer.block_size);
    let output_dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.slicer.output_dir.clone().into());

    let fs = LocalFsProvider::default();
    let splitter = Splitter::new(&fs, block_size, output_dir);

    let total = std::fs::metadata(source).map(|m| m.len()).unwrap_or(0);
    let pb = byte_progress(total)?;

    let report = match splitter.cut_with_progress(source, |chunk| {
        pb.set_message(format!("part {}", chunk.index));
        pb.inc(chunk.length);
    }) {
        Ok(report) => report,
        Err(e) if e.is_reported_only() => {
            pb.finish_and_clear();
            eprintln!("{e}");
            return Ok(());
        }
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    for chunk in &report.chunks {
        println!("  {chunk}");
    }
    println!(
        "File cut into {} parts ({} each at most) in {}.",
        report.chunk_count(),
        format_bytes(splitter.block_size()),
        splitter.output_dir().display()
    );

    Ok(())
}
