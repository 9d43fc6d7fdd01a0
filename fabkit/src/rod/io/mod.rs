mod export;
mod import;

/// External (serializable) representations of all rod-cutting related entities.
pub mod ext_repr;

/// Rendering of cut plans as SVG
pub mod svg;

/// Exports a rod-cutting solution out of the library.
pub use export::export;

/// Imports a rod-cutting instance into the library.
pub use import::import;
