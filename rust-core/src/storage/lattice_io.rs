use log::warn;
use nalgebra::DMatrix;

use crate::errors::{LatticeError, Result};
use crate::interfaces::Dimension;
use crate::lattice::{BravaisLattice, BrillouinZone};
use crate::storage::group::Group;

/// Dataset holding the completed 3×3 unit matrix of a lattice.
pub const UNITS_DATASET: &str = "units";
/// Attribute holding the number of supplied lattice vectors.
pub const DIMENSION_ATTRIBUTE: &str = "dimension";
/// Subgroup of a Brillouin zone group that holds its lattice.
pub const LATTICE_SUBGROUP: &str = "bravais_lattice";

/// Objects that can be written into and read back from a named subgroup.
pub trait GroupIo: Sized {
    fn write_to(&self, parent: &mut Group, name: &str) -> Result<()>;
    fn read_from(parent: &Group, name: &str) -> Result<Self>;
}

/// Only `units` (and its dimension) is stored. Orbital positions and names are not
/// part of the format and come back empty.
impl GroupIo for BravaisLattice {
    fn write_to(&self, parent: &mut Group, name: &str) -> Result<()> {
        let group = parent.create_group(name)?;
        group.write_matrix(UNITS_DATASET, self.units());
        group.write_attribute(DIMENSION_ATTRIBUTE, self.dim() as i64);
        Ok(())
    }

    fn read_from(parent: &Group, name: &str) -> Result<Self> {
        let group = parent.open_group(name)?;
        let units = group.read_matrix(UNITS_DATASET)?;

        let dim = match group.attribute(DIMENSION_ATTRIBUTE) {
            Some(stored) => usize::try_from(stored)
                .ok()
                .and_then(|side| Dimension::try_from(side).ok())
                .ok_or_else(|| LatticeError::InvalidAttribute {
                    name: DIMENSION_ATTRIBUTE.to_string(),
                    value: stored,
                })?
                .as_usize(),
            None => {
                warn!(
                    "lattice group '{}' has no '{}' attribute, passing the full 3x3 units",
                    name, DIMENSION_ATTRIBUTE
                );
                3
            }
        };

        // The constructor only takes the supplied block and completes the rest again
        let block = DMatrix::from_fn(dim, dim, |i, j| units[(i, j)]);
        BravaisLattice::from_units(&block)
    }
}

/// The reciprocal matrices are never stored; reading recomputes them from the lattice.
impl GroupIo for BrillouinZone {
    fn write_to(&self, parent: &mut Group, name: &str) -> Result<()> {
        let group = parent.create_group(name)?;
        self.lattice().write_to(group, LATTICE_SUBGROUP)
    }

    fn read_from(parent: &Group, name: &str) -> Result<Self> {
        let group = parent.open_group(name)?;
        let lattice = BravaisLattice::read_from(group, LATTICE_SUBGROUP)?;
        BrillouinZone::from_lattice(lattice)
    }
}
