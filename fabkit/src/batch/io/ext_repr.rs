use serde::{Deserialize, Serialize};

/// Print batching instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPrintInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Jobs waiting to be printed
    pub jobs: Vec<ExtPrintJob>,
    pub constraints: ExtPrinterConstraints,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPrintJob {
    pub id: String,
    pub volume: f64,
    pub priority: u32,
    pub print_time: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPrinterConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

/// Print batching solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPrintSolution {
    /// Job ids in the order they are printed
    pub print_order: Vec<String>,
    /// Sum of the print times of all batches, in minutes
    pub total_time: u64,
    pub batches: Vec<ExtPrintBatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPrintBatch {
    pub job_ids: Vec<String>,
    pub volume: f64,
    pub print_time: u64,
}
