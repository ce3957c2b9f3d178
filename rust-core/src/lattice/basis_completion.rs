use log::trace;
use nalgebra::{Matrix3, Vector3};

use crate::config::BASIS_TOLERANCE;
use crate::errors::{LatticeError, Result};
use crate::interfaces::Dimension;

/// Trial directions for the second basis vector of a 1D lattice, tried in order.
///
/// The first one that is not parallel to the supplied vector wins.
pub const TRIAL_AXES: [[f64; 3]; 2] = [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Remove the component of `seed` along `ux`.
pub fn orthogonalize(seed: &Vector3<f64>, ux: &Vector3<f64>) -> Vector3<f64> {
    seed - ux * (seed.dot(ux) / ux.norm_squared())
}

/// Complete a 1D lattice spanned by `ux` with two unit vectors.
///
/// Returns `(uz, uy)` where `uz` is the first trial axis orthogonalized against `ux`
/// that does not vanish, and `uy = uz × ux`. Both are normalized and mutually
/// orthogonal; `ux` itself is left untouched, so the first basis row keeps whatever
/// length was supplied.
pub fn complete_1d(ux: &Vector3<f64>) -> Result<(Vector3<f64>, Vector3<f64>)> {
    // Negated comparisons so that NaN counts as degenerate
    if !(ux.norm() >= BASIS_TOLERANCE) {
        return Err(LatticeError::DegenerateBasis(format!(
            "the unit vector of a 1d lattice is too close to zero: {:?}",
            ux.as_slice()
        )));
    }

    let uz = TRIAL_AXES
        .iter()
        .map(|axis| orthogonalize(&Vector3::from(*axis), ux))
        .find(|candidate| {
            let usable = candidate.norm() >= BASIS_TOLERANCE;
            trace!("trial axis candidate {:?} usable: {}", candidate.as_slice(), usable);
            usable
        })
        .ok_or_else(|| {
            LatticeError::DegenerateBasis(format!(
                "no trial axis is independent of {:?}",
                ux.as_slice()
            ))
        })?
        .normalize();

    // uz ⟂ ux and both non-zero, so the cross product cannot vanish
    let uy = uz.cross(ux).normalize();

    Ok((uz, uy))
}

/// Complete a 2D lattice spanned by `u0`, `u1` with the right-handed unit normal
/// `u0 × u1 / |u0 × u1|`.
pub fn complete_2d(u0: &Vector3<f64>, u1: &Vector3<f64>) -> Result<Vector3<f64>> {
    let normal = u0.cross(u1);
    let delta = normal.norm();

    // Linearly non-dependent (also catches zero vectors)
    if !(delta.abs() >= BASIS_TOLERANCE) {
        return Err(LatticeError::DegenerateBasis(format!(
            "the 2 vectors of units are not independent: {:?}, {:?}",
            u0.as_slice(),
            u1.as_slice()
        )));
    }

    Ok(normal / delta)
}

/// Fill rows `dimension..3` of `units` in place from the supplied rows `0..dimension`.
pub fn complete_basis(units: &mut Matrix3<f64>, dimension: Dimension) -> Result<()> {
    match dimension {
        Dimension::_1D => {
            let ux: Vector3<f64> = units.row(0).transpose();
            let (uz, uy) = complete_1d(&ux)?;
            units.set_row(1, &uz.transpose());
            units.set_row(2, &uy.transpose());
        }
        Dimension::_2D => {
            let u0: Vector3<f64> = units.row(0).transpose();
            let u1: Vector3<f64> = units.row(1).transpose();
            let normal = complete_2d(&u0, &u1)?;
            units.set_row(2, &normal.transpose());
        }
        Dimension::_3D => return Err(LatticeError::UnsupportedDimension(3)),
    }
    Ok(())
}
