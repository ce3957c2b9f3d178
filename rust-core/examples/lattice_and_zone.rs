/// Example: build a honeycomb lattice with two orbitals, its Brillouin zone, and store it.
use bravais_zone::lattice::{BravaisLattice, BrillouinZone};
use bravais_zone::storage::{GroupIo, StorageFile};
use nalgebra::{DMatrix, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bravais lattice and Brillouin zone ===\n");

    // 1. A 2D hexagonal lattice with the two sites of graphene
    let units = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.5, 3.0_f64.sqrt() / 2.0]);
    let lattice = BravaisLattice::new(
        &units,
        vec![Vector3::zeros(), Vector3::new(0.5, 0.5 / 3.0_f64.sqrt(), 0.0)],
        vec!["A".to_string(), "B".to_string()],
    )?;
    println!("1. Lattice:");
    println!("   Dimension: {}", lattice.dim());
    println!("   Completed units:{}", lattice.units());
    for (index, (name, position)) in lattice.orbitals().enumerate() {
        println!("   Orbital {}: {} at {:?}", index, name, position.as_slice());
    }

    // 2. The reciprocal basis
    let zone = BrillouinZone::from_lattice(lattice)?;
    println!("\n2. Brillouin zone:");
    println!("   Reciprocal basis:{}", zone.reciprocal_basis());
    let k_point = zone.frac_to_cart(Vector3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
    println!("   K point: {:?}", k_point.as_slice());

    // 3. Persist; only the units survive
    let mut file = StorageFile::new();
    zone.write_to(file.root_mut(), "graphene")?;
    println!("\n3. Storage:\n{}", file.to_json()?);

    let restored = BrillouinZone::read_from(file.root(), "graphene")?;
    println!("   Restored orbitals: {}", restored.lattice().n_orbitals());

    Ok(())
}
