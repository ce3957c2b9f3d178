//! Error types for lattice construction and storage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("units matrix must be a square matrix of size 1, 2 or 3, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("units entry ({row}, {col}) is not finite: {value}")]
    NonFiniteUnits { row: usize, col: usize, value: f64 },

    #[error("degenerate basis: {0}")]
    DegenerateBasis(String),

    #[error("basis completion is not implemented for a {0}d bravais lattice")]
    UnsupportedDimension(usize),

    #[error("got {positions} orbital positions but {names} orbital names")]
    OrbitalCountMismatch { positions: usize, names: usize },

    #[error("matrix inversion failed: {0}")]
    SingularMatrix(String),

    #[error("group '{0}' already exists")]
    GroupExists(String),

    #[error("group '{0}' not found")]
    GroupNotFound(String),

    #[error("dataset '{0}' not found")]
    DatasetNotFound(String),

    #[error("attribute '{0}' not found")]
    AttributeNotFound(String),

    #[error("attribute '{name}' has invalid value {value}")]
    InvalidAttribute { name: String, value: i64 },

    #[error("dataset '{name}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
