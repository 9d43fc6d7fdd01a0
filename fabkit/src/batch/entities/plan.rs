use crate::batch::entities::{PrintJob, PrinterConstraints};

/// Jobs printed simultaneously in one printer run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintBatch {
    pub jobs: Vec<PrintJob>,
    /// Sum of the volumes of the jobs
    pub volume: f64,
    /// A run takes as long as its slowest job
    pub print_time: u64,
}

impl PrintBatch {
    pub fn new(job: PrintJob) -> Self {
        let mut batch = Self::default();
        batch.push(job);
        batch
    }

    pub fn accepts(&self, job: &PrintJob, constraints: &PrinterConstraints) -> bool {
        self.jobs.len() < constraints.max_items && self.volume + job.volume <= constraints.max_volume
    }

    pub fn push(&mut self, job: PrintJob) {
        self.volume += job.volume;
        self.print_time = self.print_time.max(job.print_time);
        self.jobs.push(job);
    }

    pub fn n_jobs(&self) -> usize {
        self.jobs.len()
    }
}

/// Ordered sequence of printer runs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintPlan {
    pub batches: Vec<PrintBatch>,
}

impl PrintPlan {
    /// Job ids in the order they are printed
    pub fn print_order(&self) -> Vec<String> {
        self.batches
            .iter()
            .flat_map(|b| b.jobs.iter().map(|j| j.id.clone()))
            .collect()
    }

    /// Sum of the print times of all batches
    pub fn total_time(&self) -> u64 {
        self.batches.iter().map(|b| b.print_time).sum()
    }

    pub fn n_jobs(&self) -> usize {
        self.batches.iter().map(|b| b.n_jobs()).sum()
    }
}
