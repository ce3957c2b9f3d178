//! Lattice module: Bravais lattices, basis completion and Brillouin zones.
//!
//! Quick reference
//! - Types: [`BravaisLattice`], [`BrillouinZone`]
//! - Completion: [`complete_basis`], [`complete_1d`], [`complete_2d`], [`TRIAL_AXES`]
//! - Reciprocal space: [`reciprocal_basis`]
//!
//! Basis vectors are stored as the ROWS of 3×3 matrices throughout this module.

// ======================== MODULE DECLARATIONS ========================
pub mod basis_completion;
pub mod bravais_lattice;
pub mod brillouin_zone;


// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use bravais_lattice::BravaisLattice;

#[doc(inline)]
pub use brillouin_zone::BrillouinZone;

pub use basis_completion::{complete_1d, complete_2d, complete_basis, orthogonalize, TRIAL_AXES};

pub use brillouin_zone::reciprocal_basis;

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{BravaisLattice, BrillouinZone};
}
