use serde_json::Value;

use super::{encode_all, LoadReport, MealStore, Result};
use crate::domain::Meal;

/// Keeps the archived entries in memory. Entries are raw JSON so callers can
/// seed it with data a real archive might contain.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Vec<Value>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Value>) -> Self {
        Self { entries, saves: 0 }
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// How many times the collection has been saved.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl MealStore for MemoryStorage {
    fn load(&self) -> Result<LoadReport> {
        Ok(LoadReport::from_entries(&self.entries))
    }

    fn save(&mut self, meals: &[Meal]) -> Result<()> {
        self.entries = encode_all(meals);
        self.saves += 1;
        Ok(())
    }
}
