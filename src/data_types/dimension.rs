use serde::{Deserialize, Serialize};

/// How a column is interpreted for scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionKind {
    Numerical,
    Categorical,
}

/// Domain over the full dataset, computed once at load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    Numerical { min: f64, max: f64 },
    /// Sorted distinct values.
    Categorical(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionDescriptor {
    pub name: String,
    /// Column index in the dataset.
    pub column: usize,
    pub domain: Domain,
}

impl DimensionDescriptor {
    pub fn kind(&self) -> DimensionKind {
        match self.domain {
            Domain::Numerical { .. } => DimensionKind::Numerical,
            Domain::Categorical(_) => DimensionKind::Categorical,
        }
    }

    pub fn is_numerical(&self) -> bool {
        self.kind() == DimensionKind::Numerical
    }
}
