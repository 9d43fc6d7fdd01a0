#![doc = document_features::document_features!()]
//! Combinatorial optimizers for small-scale fabrication planning:
//! revenue-maximizing rod cutting and greedy 3D print batching.

/// Rod-cutting module: decompose a rod into priced segments for maximum revenue
#[cfg(feature = "rod")]
pub mod rod;

/// Print batching module: group 3D print jobs under printer volume and count limits
#[cfg(feature = "batch")]
pub mod batch;
