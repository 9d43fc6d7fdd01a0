use std::time::Instant;

use crate::io::output::PrintOutputEntry;
use anyhow::Result;
use fabkit::batch::io;
use fabkit::batch::io::ext_repr::ExtPrintInstance;
use fabkit::batch::optimize_printing;
use log::info;
use thousands::Separable;

/// Imports, batches and exports a set of print instances
pub fn solve_all(ext_instances: Vec<ExtPrintInstance>) -> Result<Vec<PrintOutputEntry>> {
    let start = Instant::now();
    let mut entries = Vec::with_capacity(ext_instances.len());

    for ext_instance in ext_instances {
        let (jobs, constraints) = io::import(&ext_instance)?;
        let plan = optimize_printing(jobs, constraints);
        info!(
            "[BATCH] {:?}: {} batches, print order {:?}, total time {} min",
            ext_instance.name,
            plan.batches.len(),
            plan.print_order(),
            plan.total_time().separate_with_commas()
        );
        entries.push(PrintOutputEntry {
            solution: io::export(&plan),
            instance: ext_instance,
        });
    }

    info!(
        "[BATCH] batched {} instances in {:.3}ms",
        entries.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(entries)
}
