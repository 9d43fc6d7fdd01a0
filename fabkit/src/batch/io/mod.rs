mod export;
mod import;

/// External (serializable) representations of all print batching related entities.
pub mod ext_repr;

/// Exports a print plan out of the library.
pub use export::export;

/// Imports a print batching instance into the library.
pub use import::import;
