//! Bravais lattice and Brillouin zone library
//!
//! Builds a full 3D real-space basis from 1 or 2 supplied lattice vectors, derives the
//! reciprocal (Brillouin zone) basis from it, and persists both through a small
//! hierarchical group container.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod lattice;
pub mod storage;

pub use errors::{LatticeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
