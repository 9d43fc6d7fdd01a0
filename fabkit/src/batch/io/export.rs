use crate::batch::entities::PrintPlan;
use crate::batch::io::ext_repr::{ExtPrintBatch, ExtPrintSolution};

/// Exports a plan out of the library
pub fn export(plan: &PrintPlan) -> ExtPrintSolution {
    ExtPrintSolution {
        print_order: plan.print_order(),
        total_time: plan.total_time(),
        batches: plan
            .batches
            .iter()
            .map(|b| ExtPrintBatch {
                job_ids: b.jobs.iter().map(|j| j.id.clone()).collect(),
                volume: b.volume,
                print_time: b.print_time,
            })
            .collect(),
    }
}
