// Definitions that are used throughout all modules

use crate::errors::LatticeError;

// Enumeration for dimensionality of the supplied lattice (always embedded in 3D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    _1D,
    _2D,
    _3D,
}

impl Dimension {
    /// Number of user-supplied basis vectors.
    pub fn as_usize(self) -> usize {
        match self {
            Dimension::_1D => 1,
            Dimension::_2D => 2,
            Dimension::_3D => 3,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = LatticeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            1 => Ok(Dimension::_1D),
            2 => Ok(Dimension::_2D),
            3 => Ok(Dimension::_3D),
            other => Err(LatticeError::InvalidDimension {
                rows: other,
                cols: other,
            }),
        }
    }
}

