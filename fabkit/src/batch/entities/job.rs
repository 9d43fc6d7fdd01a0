/// A model to be printed
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub id: String,
    /// Build volume the model occupies
    pub volume: f64,
    /// 1 is the most urgent
    pub priority: u32,
    /// Print time in minutes
    pub print_time: u64,
}

/// Limits of the printer for a single run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

impl PrinterConstraints {
    /// Whether the job fits on the printer on its own
    pub fn admits(&self, job: &PrintJob) -> bool {
        self.max_items > 0 && job.volume <= self.max_volume
    }
}
