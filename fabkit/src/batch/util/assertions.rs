use crate::batch::entities::{PrintPlan, PrinterConstraints};

pub fn plan_respects_constraints(plan: &PrintPlan, constraints: &PrinterConstraints) -> bool {
    plan.batches.iter().all(|b| {
        !b.jobs.is_empty()
            && b.jobs.len() <= constraints.max_items
            && b.volume <= constraints.max_volume
            && b.jobs.iter().map(|j| j.print_time).max() == Some(b.print_time)
    })
}

/// Batches are filled in non-decreasing priority order
pub fn plan_respects_priorities(plan: &PrintPlan) -> bool {
    plan.batches
        .iter()
        .flat_map(|b| b.jobs.iter().map(|j| j.priority))
        .is_sorted()
}
