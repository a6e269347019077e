pub mod json_backend;
pub mod memory;

use serde_json::Value;

use crate::{
    domain::{archive, DecodeError, Meal},
    errors::StorageError,
};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over persistence backends capable of storing the meal collection.
pub trait MealStore {
    fn load(&self) -> Result<LoadReport>;
    fn save(&mut self, meals: &[Meal]) -> Result<()>;
}

/// An archived entry that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub index: usize,
    pub error: DecodeError,
}

/// Meals recovered from an archive plus the entries that failed to decode.
///
/// Whether rejected entries are skipped or abort the load is the caller's call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub meals: Vec<Meal>,
    pub rejected: Vec<RejectedEntry>,
}

impl LoadReport {
    /// Decodes every archived entry, keeping their order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut report = LoadReport::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match archive::decode_value(entry) {
                Ok(meal) => report.meals.push(meal),
                Err(error) => report.rejected.push(RejectedEntry { index, error }),
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Encodes the collection into the archive's top-level array.
pub fn encode_all(meals: &[Meal]) -> Vec<Value> {
    meals
        .iter()
        .map(|meal| Value::Object(archive::encode(meal)))
        .collect()
}

pub use json_backend::{JsonStorage, ARCHIVE_TMP_SUFFIX};
pub use memory::MemoryStorage;
