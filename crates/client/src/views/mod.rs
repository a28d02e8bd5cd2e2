//! View components for the application.

pub mod catalog;

pub use catalog::PlantCatalog;
