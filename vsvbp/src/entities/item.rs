use serde::{Deserialize, Serialize};

/// Position of an [`Item`] in [`Instance::items`](crate::entities::Instance::items).
pub type ItemId = usize;

/// Item to be packed: a vector of per-resource requirements.
///
/// Items are identified by their position in the instance, two items with equal requirements are distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub requirements: Vec<u64>,
}

impl Item {
    pub fn new(requirements: Vec<u64>) -> Self {
        Self { requirements }
    }

    /// Number of resource dimensions
    pub fn dims(&self) -> usize {
        self.requirements.len()
    }
}

impl From<&[u64]> for Item {
    fn from(requirements: &[u64]) -> Self {
        Self::new(requirements.to_vec())
    }
}
