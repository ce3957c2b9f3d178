use std::sync::Arc;

use log::debug;
use nalgebra::{Matrix3, Vector3};

use crate::config::{BASIS_TOLERANCE, RECIPROCAL_PREFACTOR};
use crate::errors::{LatticeError, Result};
use crate::lattice::bravais_lattice::BravaisLattice;

/// The Brillouin zone of a [`BravaisLattice`], described by its reciprocal basis.
///
/// The zone shares the lattice through an [`Arc`]; it reads the lattice's `units` but
/// never copies its orbital data.
#[derive(Debug, Clone)]
pub struct BrillouinZone {
    lattice: Arc<BravaisLattice>,
    /// Reciprocal basis vectors (rows), `a_i · b_j = 2π δ_ij`.
    reciprocal: Matrix3<f64>,
    /// Inverse of `reciprocal`, cached at construction.
    reciprocal_inv: Matrix3<f64>,
}

impl BrillouinZone {
    /// Construct the Brillouin zone of a shared lattice.
    pub fn new(lattice: Arc<BravaisLattice>) -> Result<Self> {
        let reciprocal = reciprocal_basis(lattice.units())?;

        let reciprocal_inv = reciprocal.try_inverse().ok_or_else(|| {
            LatticeError::SingularMatrix(format!(
                "reciprocal basis is not invertible:{}",
                reciprocal
            ))
        })?;
        debug!(
            "constructed brillouin zone of a {}d lattice, K_reciprocal ={}",
            lattice.dim(),
            reciprocal
        );

        Ok(BrillouinZone {
            lattice,
            reciprocal,
            reciprocal_inv,
        })
    }

    /// Construct the Brillouin zone of a lattice that the zone will be the first holder of.
    pub fn from_lattice(lattice: BravaisLattice) -> Result<Self> {
        Self::new(Arc::new(lattice))
    }

    pub fn lattice(&self) -> &BravaisLattice {
        &self.lattice
    }

    /// Another shared handle on the underlying lattice.
    pub fn lattice_handle(&self) -> Arc<BravaisLattice> {
        Arc::clone(&self.lattice)
    }

    /// Reciprocal basis vectors, one per row.
    pub fn reciprocal_basis(&self) -> &Matrix3<f64> {
        &self.reciprocal
    }

    pub fn reciprocal_basis_inverse(&self) -> &Matrix3<f64> {
        &self.reciprocal_inv
    }

    /// The `i`-th reciprocal basis vector.
    pub fn reciprocal_vector(&self, i: usize) -> Vector3<f64> {
        self.reciprocal.row(i).transpose()
    }

    /// Convert reciprocal lattice coordinates → cartesian k: `Σ k_i b_i`.
    pub fn frac_to_cart(&self, k_frac: Vector3<f64>) -> Vector3<f64> {
        (k_frac.transpose() * self.reciprocal).transpose()
    }

    /// Convert cartesian k → reciprocal lattice coordinates.
    pub fn cart_to_frac(&self, k_cart: Vector3<f64>) -> Vector3<f64> {
        (k_cart.transpose() * self.reciprocal_inv).transpose()
    }
}

/// Reciprocal basis (rows) of the real-space basis `units` (rows):
///
/// ```text
/// b0 = 2π (a1 × a2) / V
/// b1 = 2π (a2 × a0) / V
/// b2 = 2π (a0 × a1) / V,   V = a0 · (a1 × a2)
/// ```
pub fn reciprocal_basis(units: &Matrix3<f64>) -> Result<Matrix3<f64>> {
    let a0: Vector3<f64> = units.row(0).transpose();
    let a1: Vector3<f64> = units.row(1).transpose();
    let a2: Vector3<f64> = units.row(2).transpose();

    let delta = a0.dot(&a1.cross(&a2));
    if !(delta.abs() >= BASIS_TOLERANCE) {
        return Err(LatticeError::DegenerateBasis(format!(
            "the 3 vectors of units are not independent:{}",
            units
        )));
    }

    let scale = RECIPROCAL_PREFACTOR / delta;
    let mut reciprocal = Matrix3::zeros();
    reciprocal.set_row(0, &(a1.cross(&a2) * scale).transpose());
    reciprocal.set_row(1, &(a2.cross(&a0) * scale).transpose());
    reciprocal.set_row(2, &(a0.cross(&a1) * scale).transpose());
    Ok(reciprocal)
}
