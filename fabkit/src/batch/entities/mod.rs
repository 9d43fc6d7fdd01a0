mod job;
mod plan;

#[doc(inline)]
pub use job::PrintJob;
#[doc(inline)]
pub use job::PrinterConstraints;
#[doc(inline)]
pub use plan::PrintBatch;
#[doc(inline)]
pub use plan::PrintPlan;
