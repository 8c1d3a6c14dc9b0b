use anyhow::Result;
use std::path::Path;

use slicer_core::collect::{CollectPlan, Joiner};
use slicer_core::units::format_bytes;
use slicer_storage::LocalFsProvider;

use super::{count_progress, load_config};

pub fn run(folder: &Path, base_dir: &Path, dest: Option<&Path>) -> Result<()> {
    let config = load_config(base_dir)?;
    let dest = dest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.slicer.dest_dir.clone().into());

    let fs = LocalFsProvider::default();
    let joiner = Joiner::new(&fs, dest);

    let plans = match joiner.plan(folder) {
        Ok(plans) => plans,
        Err(e) if e.is_reported_only() => {
            eprintln!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for plan in &plans {
        rebuild(&joiner, plan)?;
    }

    Ok(())
}

fn rebuild(joiner: &Joiner<'_>, plan: &CollectPlan) -> Result<()> {
    println!("Collecting {} parts of '{}'", plan.chunks.len(), plan.original);

    let pb = count_progress(plan.chunks.len() as u64)?;
    let report = joiner.execute(plan, |chunk| {
        pb.set_message(format!("part {}", chunk.index));
        pb.inc(1);
    });
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    println!(
        "Original file rebuilt as '{}' ({}).",
        report.output.display(),
        format_bytes(report.total_bytes)
    );

    Ok(())
}
