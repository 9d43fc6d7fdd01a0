use crate::batch::entities::{PrintJob, PrinterConstraints};
use crate::batch::io::ext_repr::ExtPrintInstance;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Imports an instance into the library.
/// Jobs which could never be printed under the constraints are rejected.
pub fn import(ext_instance: &ExtPrintInstance) -> Result<(Vec<PrintJob>, PrinterConstraints)> {
    let name = &ext_instance.name;
    let constraints = PrinterConstraints {
        max_volume: ext_instance.constraints.max_volume,
        max_items: ext_instance.constraints.max_items,
    };
    ensure!(
        constraints.max_items > 0,
        "instance {name:?}: printer must accept at least one item per run"
    );
    ensure!(
        constraints.max_volume.is_finite() && constraints.max_volume >= 0.0,
        "instance {name:?}: invalid printer volume {}",
        constraints.max_volume
    );

    let duplicates = ext_instance.jobs.iter().map(|j| &j.id).duplicates().collect_vec();
    ensure!(
        duplicates.is_empty(),
        "instance {name:?}: job ids should be unique, duplicates: {duplicates:?}"
    );

    let jobs = ext_instance
        .jobs
        .iter()
        .map(|ext_job| -> Result<PrintJob> {
            ensure!(
                ext_job.volume.is_finite() && ext_job.volume >= 0.0,
                "instance {name:?}: job {} has invalid volume {}",
                ext_job.id,
                ext_job.volume
            );
            let job = PrintJob {
                id: ext_job.id.clone(),
                volume: ext_job.volume,
                priority: ext_job.priority,
                print_time: ext_job.print_time,
            };
            ensure!(
                constraints.admits(&job),
                "instance {name:?}: job {} (volume {}) exceeds the printer volume {}",
                job.id,
                job.volume,
                constraints.max_volume
            );
            Ok(job)
        })
        .collect::<Result<Vec<PrintJob>>>()?;

    Ok((jobs, constraints))
}
