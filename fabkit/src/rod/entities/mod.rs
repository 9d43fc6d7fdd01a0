mod instance;
mod price_table;
mod profit;
mod solution;

#[doc(inline)]
pub use instance::RodInstance;
#[doc(inline)]
pub use price_table::PriceTable;
#[doc(inline)]
pub use profit::Profit;
#[doc(inline)]
pub use solution::RodSolution;
#[doc(inline)]
pub use solution::SolutionRecord;
