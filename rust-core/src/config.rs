// Constants

use std::f64::consts::PI;

// Tolerances
pub const BASIS_TOLERANCE: f64 = 1e-10; // Every "is this (near-)zero" decision during lattice and zone construction

// Conventions
pub const RECIPROCAL_PREFACTOR: f64 = 2.0 * PI; // a_i . b_j = 2π δ_ij
