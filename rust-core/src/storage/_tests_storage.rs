#[cfg(test)]
mod _tests_storage {
    use super::super::group::{Dataset, Group, StorageFile};
    use super::super::lattice_io::*;
    use crate::errors::LatticeError;
    use crate::lattice::{BravaisLattice, BrillouinZone};
    use nalgebra::{DMatrix, Matrix3, Vector3};
    use tempfile::TempDir;

    fn hexagonal_lattice_with_orbitals() -> BravaisLattice {
        let units = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.5, 3.0_f64.sqrt() / 2.0]);
        BravaisLattice::new(
            &units,
            vec![Vector3::zeros(), Vector3::new(0.5, 0.0, 0.0)],
            vec!["A".to_string(), "B".to_string()],
        )
        .unwrap()
    }

    // ==================== Group tree ====================

    #[test]
    fn test_create_and_open_group() {
        let mut root = Group::new();
        root.create_group("lattice").unwrap();

        assert!(root.has_group("lattice"));
        assert!(root.open_group("lattice").is_ok());
        assert!(matches!(
            root.open_group("missing"),
            Err(LatticeError::GroupNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_create_existing_group_fails() {
        let mut root = Group::new();
        root.create_group("lattice").unwrap();
        assert!(matches!(
            root.create_group("lattice"),
            Err(LatticeError::GroupExists(_))
        ));
    }

    #[test]
    fn test_matrix_dataset_is_row_major() {
        let matrix = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let dataset = Dataset::from_matrix(&matrix);

        assert_eq!(dataset.shape, vec![3, 3]);
        assert_eq!(dataset.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        let mut group = Group::new();
        group.write_matrix("m", &matrix);
        assert_eq!(group.read_matrix("m").unwrap(), matrix);
    }

    #[test]
    fn test_read_matrix_shape_mismatch() {
        let mut group = Group::new();
        group.write_dataset(
            "v",
            Dataset {
                shape: vec![3],
                data: vec![1.0, 2.0, 3.0],
            },
        );
        assert!(matches!(
            group.read_matrix("v"),
            Err(LatticeError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            group.read_matrix("missing"),
            Err(LatticeError::DatasetNotFound(_))
        ));
    }

    #[test]
    fn test_attributes() {
        let mut group = Group::new();
        group.write_attribute("dimension", 2);
        assert_eq!(group.read_attribute("dimension").unwrap(), 2);
        assert!(matches!(
            group.read_attribute("other"),
            Err(LatticeError::AttributeNotFound(_))
        ));
    }

    // ==================== Lattice persistence ====================

    #[test]
    fn test_lattice_layout() {
        let lattice = hexagonal_lattice_with_orbitals();
        let mut root = Group::new();
        lattice.write_to(&mut root, "bl").unwrap();

        let group = root.open_group("bl").unwrap();
        assert!(group.has_dataset(UNITS_DATASET));
        assert_eq!(group.read_attribute(DIMENSION_ATTRIBUTE).unwrap(), 2);
        assert_eq!(group.group_names().count(), 0);
    }

    #[test]
    fn test_lattice_units_round_trip_exactly() {
        for lattice in [
            hexagonal_lattice_with_orbitals(),
            BravaisLattice::from_units(&DMatrix::from_element(1, 1, 0.1 + 0.2)).unwrap(),
            BravaisLattice::from_rows(&[vec![1.0 / 3.0, 0.7], vec![-2.0, 1e-3]]).unwrap(),
        ] {
            let mut root = Group::new();
            lattice.write_to(&mut root, "bl").unwrap();
            let restored = BravaisLattice::read_from(&root, "bl").unwrap();

            assert_eq!(restored.units(), lattice.units());
            assert_eq!(restored.dim(), lattice.dim());
        }
    }

    #[test]
    fn test_lattice_orbitals_do_not_round_trip() {
        let lattice = hexagonal_lattice_with_orbitals();
        assert_eq!(lattice.n_orbitals(), 2);

        let mut root = Group::new();
        lattice.write_to(&mut root, "bl").unwrap();
        let restored = BravaisLattice::read_from(&root, "bl").unwrap();

        assert_eq!(restored.n_orbitals(), 0);
        assert!(restored.orbital_names().is_empty());
        assert_ne!(restored, lattice);
    }

    #[test]
    fn test_lattice_without_dimension_attribute_is_unsupported() {
        let mut root = Group::new();
        root.create_group("bl")
            .unwrap()
            .write_matrix(UNITS_DATASET, &Matrix3::identity());

        let result = BravaisLattice::read_from(&root, "bl");
        assert!(matches!(result, Err(LatticeError::UnsupportedDimension(3))));
    }

    #[test]
    fn test_lattice_with_bad_dimension_attribute() {
        let mut root = Group::new();
        let group = root.create_group("bl").unwrap();
        group.write_matrix(UNITS_DATASET, &Matrix3::identity());
        group.write_attribute(DIMENSION_ATTRIBUTE, 7);

        let result = BravaisLattice::read_from(&root, "bl");
        assert!(matches!(
            result,
            Err(LatticeError::InvalidAttribute { ref name, value: 7 }) if name == DIMENSION_ATTRIBUTE
        ));
    }

    #[test]
    fn test_lattice_with_negative_dimension_attribute() {
        let mut root = Group::new();
        let group = root.create_group("bl").unwrap();
        group.write_matrix(UNITS_DATASET, &Matrix3::identity());
        group.write_attribute(DIMENSION_ATTRIBUTE, -2);

        let result = BravaisLattice::read_from(&root, "bl");
        assert!(matches!(
            result,
            Err(LatticeError::InvalidAttribute { value: -2, .. })
        ));
    }

    #[test]
    fn test_zone_layout_and_round_trip() {
        let zone = BrillouinZone::from_lattice(hexagonal_lattice_with_orbitals()).unwrap();
        let mut root = Group::new();
        zone.write_to(&mut root, "bz").unwrap();

        let group = root.open_group("bz").unwrap();
        assert!(group.has_group(LATTICE_SUBGROUP));
        // reciprocal matrices are recomputed, never stored
        assert!(!group.has_dataset("reciprocal_basis"));
        assert!(!group.has_dataset(UNITS_DATASET));

        let restored = BrillouinZone::read_from(&root, "bz").unwrap();
        assert_eq!(restored.lattice().units(), zone.lattice().units());
        assert_eq!(restored.reciprocal_basis(), zone.reciprocal_basis());
        assert_eq!(restored.reciprocal_basis_inverse(), zone.reciprocal_basis_inverse());
        assert_eq!(restored.lattice().n_orbitals(), 0);
    }

    #[test]
    fn test_missing_zone_group() {
        let root = Group::new();
        assert!(matches!(
            BrillouinZone::read_from(&root, "bz"),
            Err(LatticeError::GroupNotFound(_))
        ));
    }

    // ==================== Files ====================

    #[test]
    fn test_storage_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zone.json");

        let zone = BrillouinZone::from_lattice(
            BravaisLattice::from_rows(&[vec![0.1, 0.3], vec![-0.7, 1.0 / 7.0]]).unwrap(),
        )
        .unwrap();

        let mut file = StorageFile::new();
        zone.write_to(file.root_mut(), "bz").unwrap();
        file.save(&path).unwrap();

        let loaded = StorageFile::load(&path).unwrap();
        assert_eq!(loaded, file);

        let restored = BrillouinZone::read_from(loaded.root(), "bz").unwrap();
        assert_eq!(restored.lattice().units(), zone.lattice().units());
    }

    #[test]
    fn test_storage_json_string_round_trip() {
        let mut file = StorageFile::new();
        hexagonal_lattice_with_orbitals()
            .write_to(file.root_mut(), "bl")
            .unwrap();

        let json = file.to_json().unwrap();
        assert!(json.contains("\"units\""));
        assert_eq!(StorageFile::from_json(&json).unwrap(), file);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = StorageFile::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(LatticeError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        assert!(matches!(
            StorageFile::from_json("{ not json"),
            Err(LatticeError::Json(_))
        ));
    }
}
