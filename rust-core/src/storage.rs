//! Storage module: a small hierarchical container of groups, matrix datasets and
//! integer attributes, persisted as JSON.
//!
//! Quick reference
//! - Containers: [`Group`], [`Dataset`], [`StorageFile`]
//! - Lattice persistence: [`GroupIo`] (implemented for `BravaisLattice` and `BrillouinZone`)

// ======================== MODULE DECLARATIONS ========================
pub mod group;
pub mod lattice_io;

// Test modules
mod _tests_storage;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
pub use group::{Dataset, Group, StorageFile};

pub use lattice_io::{GroupIo, DIMENSION_ATTRIBUTE, LATTICE_SUBGROUP, UNITS_DATASET};
