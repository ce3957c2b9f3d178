use log::debug;
use nalgebra::{DMatrix, Matrix3, Vector3};

use crate::errors::{LatticeError, Result};
use crate::interfaces::Dimension;
use crate::lattice::basis_completion::complete_basis;

/// A 1D or 2D Bravais lattice embedded in 3D space, with the atomic orbitals of its
/// unit cell.
///
/// The basis vectors are the ROWS of [`units`](Self::units). Rows `0..dim` are the
/// supplied lattice vectors, the remaining rows come from basis completion.
#[derive(Debug, Clone, PartialEq)]
pub struct BravaisLattice {
    /// Number of supplied lattice vectors.
    dimension: Dimension,
    /// Completed real-space basis, one vector per row.
    units: Matrix3<f64>,
    /// Orbital positions; the index is the orbital index.
    atom_orb_pos: Vec<Vector3<f64>>,
    /// Orbital labels, paired with `atom_orb_pos` by index.
    atom_orb_name: Vec<String>,
}

impl BravaisLattice {
    /// Construct a lattice from the `dim × dim` block of supplied vectors (one per row)
    /// and the orbitals of the unit cell.
    ///
    /// The block is embedded in the top-left corner of a zero 3×3 matrix before the
    /// missing rows are completed, so a 1D lattice always lies along x and a 2D lattice
    /// in the xy-plane.
    pub fn new(
        units: &DMatrix<f64>,
        atom_orb_pos: Vec<Vector3<f64>>,
        atom_orb_name: Vec<String>,
    ) -> Result<Self> {
        let (rows, cols) = units.shape();
        if rows != cols {
            return Err(LatticeError::InvalidDimension { rows, cols });
        }
        let dimension = Dimension::try_from(rows)?;

        if atom_orb_pos.len() != atom_orb_name.len() {
            return Err(LatticeError::OrbitalCountMismatch {
                positions: atom_orb_pos.len(),
                names: atom_orb_name.len(),
            });
        }

        let dim = dimension.as_usize();
        if let Some((row, col)) = (0..dim)
            .flat_map(|i| (0..dim).map(move |j| (i, j)))
            .find(|&(i, j)| !units[(i, j)].is_finite())
        {
            return Err(LatticeError::NonFiniteUnits {
                row,
                col,
                value: units[(row, col)],
            });
        }

        let mut full_units = Matrix3::zeros();
        full_units
            .view_mut((0, 0), (dim, dim))
            .copy_from(&units.view((0, 0), (dim, dim)));

        complete_basis(&mut full_units, dimension)?;
        debug!(
            "constructed {}d bravais lattice with {} orbitals, units ={}",
            dim,
            atom_orb_pos.len(),
            full_units
        );

        Ok(BravaisLattice {
            dimension,
            units: full_units,
            atom_orb_pos,
            atom_orb_name,
        })
    }

    /// Construct a lattice without orbitals.
    pub fn from_units(units: &DMatrix<f64>) -> Result<Self> {
        Self::new(units, Vec::new(), Vec::new())
    }

    /// Construct a lattice from the supplied basis vectors given as rows of `f64`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let side = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != side) {
            return Err(LatticeError::InvalidDimension {
                rows: side,
                cols: bad.len(),
            });
        }
        let units = DMatrix::from_fn(side, side, |i, j| rows[i][j]);
        Self::from_units(&units)
    }

    /// Number of supplied lattice vectors.
    pub fn dim(&self) -> usize {
        self.dimension.as_usize()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Completed real-space basis, one vector per row.
    pub fn units(&self) -> &Matrix3<f64> {
        &self.units
    }

    /// The `i`-th basis vector.
    pub fn unit_vector(&self, i: usize) -> Vector3<f64> {
        self.units.row(i).transpose()
    }

    pub fn n_orbitals(&self) -> usize {
        self.atom_orb_pos.len()
    }

    pub fn orbital_positions(&self) -> &[Vector3<f64>] {
        &self.atom_orb_pos
    }

    pub fn orbital_names(&self) -> &[String] {
        &self.atom_orb_name
    }

    /// Orbitals as `(name, position)` pairs in orbital order.
    pub fn orbitals(&self) -> impl Iterator<Item = (&str, &Vector3<f64>)> {
        self.atom_orb_name
            .iter()
            .map(String::as_str)
            .zip(self.atom_orb_pos.iter())
    }

    /// Signed volume of the completed unit cell, `a0 · (a1 × a2)`.
    pub fn cell_volume(&self) -> f64 {
        self.unit_vector(0)
            .dot(&self.unit_vector(1).cross(&self.unit_vector(2)))
    }

    /// Convert lattice (fractional) coordinates → cartesian: `Σ x_i a_i`.
    pub fn frac_to_cart(&self, x: Vector3<f64>) -> Vector3<f64> {
        self.units.transpose() * x
    }

    /// Convert cartesian coordinates → lattice (fractional) coordinates.
    pub fn cart_to_frac(&self, r: Vector3<f64>) -> Result<Vector3<f64>> {
        let inverse = self.units.transpose().try_inverse().ok_or_else(|| {
            LatticeError::SingularMatrix(format!(
                "bravais lattice units are not invertible:{}",
                self.units
            ))
        })?;
        Ok(inverse * r)
    }
}
