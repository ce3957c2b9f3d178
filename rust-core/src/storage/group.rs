use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::errors::{LatticeError, Result};

/// A dense array of doubles stored in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl Dataset {
    /// Row-major dataset of a 3×3 matrix.
    pub fn from_matrix(matrix: &Matrix3<f64>) -> Self {
        let data = (0..3)
            .flat_map(|i| (0..3).map(move |j| matrix[(i, j)]))
            .collect();
        Dataset {
            shape: vec![3, 3],
            data,
        }
    }
}

/// A node of the storage tree: named datasets, integer attributes and subgroups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    attributes: BTreeMap<String, i64>,
    #[serde(default)]
    datasets: BTreeMap<String, Dataset>,
    #[serde(default)]
    groups: BTreeMap<String, Group>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty subgroup. Fails if a subgroup of that name already exists.
    pub fn create_group(&mut self, name: &str) -> Result<&mut Group> {
        if self.groups.contains_key(name) {
            return Err(LatticeError::GroupExists(name.to_string()));
        }
        Ok(self.groups.entry(name.to_string()).or_default())
    }

    pub fn open_group(&self, name: &str) -> Result<&Group> {
        self.groups
            .get(name)
            .ok_or_else(|| LatticeError::GroupNotFound(name.to_string()))
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Write (or replace) a dataset.
    pub fn write_dataset(&mut self, name: &str, dataset: Dataset) {
        self.datasets.insert(name.to_string(), dataset);
    }

    pub fn read_dataset(&self, name: &str) -> Result<&Dataset> {
        self.datasets
            .get(name)
            .ok_or_else(|| LatticeError::DatasetNotFound(name.to_string()))
    }

    pub fn has_dataset(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    pub fn write_matrix(&mut self, name: &str, matrix: &Matrix3<f64>) {
        self.write_dataset(name, Dataset::from_matrix(matrix));
    }

    /// Read a 3×3 dataset back into a matrix.
    pub fn read_matrix(&self, name: &str) -> Result<Matrix3<f64>> {
        let dataset = self.read_dataset(name)?;
        if dataset.shape != [3, 3] || dataset.data.len() != 9 {
            return Err(LatticeError::ShapeMismatch {
                name: name.to_string(),
                expected: vec![3, 3],
                found: dataset.shape.clone(),
            });
        }
        Ok(Matrix3::from_row_slice(&dataset.data))
    }

    pub fn write_attribute(&mut self, name: &str, value: i64) {
        self.attributes.insert(name.to_string(), value);
    }

    pub fn attribute(&self, name: &str) -> Option<i64> {
        self.attributes.get(name).copied()
    }

    pub fn read_attribute(&self, name: &str) -> Result<i64> {
        self.attribute(name)
            .ok_or_else(|| LatticeError::AttributeNotFound(name.to_string()))
    }
}

/// A storage tree backed by a JSON file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageFile {
    root: Group,
}

impl StorageFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Group {
        &mut self.root
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(StorageFile {
            root: serde_json::from_str(json)?,
        })
    }

    /// Write the whole tree to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.root)?;
        debug!("saved storage tree to {}", path.display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let root = serde_json::from_reader(reader)?;
        debug!("loaded storage tree from {}", path.display());
        Ok(StorageFile { root })
    }
}
