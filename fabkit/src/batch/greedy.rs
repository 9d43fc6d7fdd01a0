use crate::batch::entities::{PrintBatch, PrintJob, PrintPlan, PrinterConstraints};
use crate::batch::util::assertions;
use log::debug;

/// Groups print jobs into printer runs.
///
/// Jobs are ordered by priority (stable, so equal priorities keep their input order) and
/// greedily appended to the open batch while it respects both the item and the volume limit.
/// A job that does not fit closes the open batch and starts a new one.
///
/// Every job must fit on the printer on its own, see [`PrinterConstraints::admits`].
pub fn optimize_printing(mut jobs: Vec<PrintJob>, constraints: PrinterConstraints) -> PrintPlan {
    debug_assert!(jobs.iter().all(|j| constraints.admits(j)));
    jobs.sort_by_key(|j| j.priority);

    let mut batches = vec![];
    let mut open: Option<PrintBatch> = None;

    for job in jobs {
        match open.as_mut() {
            Some(batch) if batch.accepts(&job, &constraints) => batch.push(job),
            _ => {
                if let Some(closed) = open.replace(PrintBatch::new(job)) {
                    debug!(
                        "[BATCH] closed batch {} with {} jobs, volume {:.1}, time {}",
                        batches.len(),
                        closed.n_jobs(),
                        closed.volume,
                        closed.print_time
                    );
                    batches.push(closed);
                }
            }
        }
    }
    batches.extend(open);

    let plan = PrintPlan { batches };
    debug_assert!(assertions::plan_respects_constraints(&plan, &constraints));
    debug!(
        "[BATCH] {} jobs in {} batches, total time {}",
        plan.n_jobs(),
        plan.batches.len(),
        plan.total_time()
    );
    plan
}
