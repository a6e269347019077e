//! The collaborator that owns the meal collection: it opens edit forms,
//! takes their outcomes and keeps the archive in sync.

use thiserror::Error;

use crate::{
    domain::Meal,
    errors::StorageError,
    form::{FormController, FormOutcome, FormView, Presentation},
    storage::MealStore,
};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("no meal at position {0}")]
    NotFound(usize),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Which entry an edit form is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(usize),
}

pub struct MealList<S: MealStore> {
    store: S,
    meals: Vec<Meal>,
}

impl<S: MealStore> MealList<S> {
    /// Loads the collection, skipping entries that fail to decode.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let report = store.load()?;
        for rejected in &report.rejected {
            tracing::warn!(
                index = rejected.index,
                error = %rejected.error,
                "Skipping archived meal that failed to decode."
            );
        }
        Ok(Self {
            store,
            meals: report.meals,
        })
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds an idle form for `target`. New meals are presented modally,
    /// existing ones are pushed.
    pub fn open_editor<V: FormView>(
        &self,
        target: EditTarget,
        view: V,
    ) -> Result<FormController<V>, ListError> {
        match target {
            EditTarget::New => Ok(FormController::new(None, Presentation::Modal, view)),
            EditTarget::Existing(index) => {
                let meal = self.meals.get(index).ok_or(ListError::NotFound(index))?;
                Ok(FormController::new(
                    Some(meal.clone()),
                    Presentation::Pushed,
                    view,
                ))
            }
        }
    }

    /// Folds a finished form back into the collection and persists it.
    ///
    /// Returns the position of the saved meal, or `None` for a dismissal.
    pub fn apply(
        &mut self,
        target: EditTarget,
        outcome: FormOutcome,
    ) -> Result<Option<usize>, ListError> {
        let meal = match outcome {
            FormOutcome::Saved(meal) => meal,
            FormOutcome::Dismissed(dismissal) => {
                tracing::debug!(?target, ?dismissal, "Meal edit dismissed.");
                return Ok(None);
            }
        };

        let mut next = self.meals.clone();
        let index = match target {
            EditTarget::New => {
                next.push(meal);
                next.len() - 1
            }
            EditTarget::Existing(index) => {
                let slot = next.get_mut(index).ok_or(ListError::NotFound(index))?;
                *slot = meal;
                index
            }
        };
        self.commit(next)?;
        Ok(Some(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<Meal, ListError> {
        if index >= self.meals.len() {
            return Err(ListError::NotFound(index));
        }
        let mut next = self.meals.clone();
        let meal = next.remove(index);
        self.commit(next)?;
        tracing::info!(meal = %meal.name(), "Removed meal.");
        Ok(meal)
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        self.store.save(&self.meals)
    }

    /// Persists `next` and only then adopts it, so a failed save leaves the
    /// in-memory list matching the archive.
    fn commit(&mut self, next: Vec<Meal>) -> Result<(), StorageError> {
        self.store.save(&next)?;
        self.meals = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Dismissal, RecordingView};
    use crate::storage::{LoadReport, MemoryStorage};
    use serde_json::json;

    /// Store whose saves always fail.
    struct RejectingStore {
        meals: Vec<Meal>,
    }

    impl MealStore for RejectingStore {
        fn load(&self) -> crate::storage::Result<LoadReport> {
            Ok(LoadReport {
                meals: self.meals.clone(),
                rejected: Vec::new(),
            })
        }

        fn save(&mut self, _meals: &[Meal]) -> crate::storage::Result<()> {
            Err(StorageError::MalformedArchive("read-only".into()))
        }
    }

    fn rejecting_list() -> MealList<RejectingStore> {
        MealList::open(RejectingStore {
            meals: vec![
                Meal::new("Soup", "noon").unwrap(),
                Meal::new("Salad", "night").unwrap(),
            ],
        })
        .unwrap()
    }

    fn list_with(entries: Vec<serde_json::Value>) -> MealList<MemoryStorage> {
        MealList::open(MemoryStorage::with_entries(entries)).unwrap()
    }

    #[test]
    fn open_skips_undecodable_entries() {
        let list = list_with(vec![
            json!({"name": "Soup", "creation time": "noon"}),
            json!({"creation time": "now"}),
        ]);
        assert_eq!(list.meals(), &[Meal::new("Soup", "noon").unwrap()]);
    }

    #[test]
    fn editor_for_existing_meal_is_pushed_with_source() {
        let list = list_with(vec![json!({"name": "Soup", "creation time": "noon"})]);
        let form = list
            .open_editor(EditTarget::Existing(0), RecordingView::new())
            .unwrap();
        assert_eq!(form.presentation(), Presentation::Pushed);
        assert_eq!(form.source(), list.get(0));

        let form = list
            .open_editor(EditTarget::New, RecordingView::new())
            .unwrap();
        assert_eq!(form.presentation(), Presentation::Modal);
        assert!(form.source().is_none());
    }

    #[test]
    fn editor_for_missing_index_fails() {
        let list = list_with(Vec::new());
        let err = list
            .open_editor(EditTarget::Existing(3), RecordingView::new())
            .err()
            .unwrap();
        assert!(matches!(err, ListError::NotFound(3)));
    }

    #[test]
    fn apply_appends_replaces_and_persists() {
        let mut list = list_with(vec![json!({"name": "Soup", "creation time": "noon"})]);

        let added = list
            .apply(
                EditTarget::New,
                FormOutcome::Saved(Meal::new("Pizza", "evening").unwrap()),
            )
            .unwrap();
        assert_eq!(added, Some(1));

        let replaced = list
            .apply(
                EditTarget::Existing(0),
                FormOutcome::Saved(Meal::new("Stew", "noon").unwrap()),
            )
            .unwrap();
        assert_eq!(replaced, Some(0));

        assert_eq!(list.store().save_count(), 2);
        assert_eq!(
            list.store().entries(),
            &[
                json!({"name": "Stew", "creation time": "noon"}),
                json!({"name": "Pizza", "creation time": "evening"}),
            ]
        );
    }

    #[test]
    fn dismissal_changes_nothing() {
        let mut list = list_with(vec![json!({"name": "Soup", "creation time": "noon"})]);
        let result = list
            .apply(
                EditTarget::Existing(0),
                FormOutcome::Dismissed(Dismissal::Pop),
            )
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(list.store().save_count(), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_deletes_and_persists() {
        let mut list = list_with(vec![
            json!({"name": "Soup", "creation time": "noon"}),
            json!({"name": "Salad", "creation time": "night"}),
        ]);
        let removed = list.remove(0).unwrap();
        assert_eq!(removed.name(), "Soup");
        assert_eq!(list.store().entries().len(), 1);
        assert!(matches!(list.remove(5), Err(ListError::NotFound(5))));
    }

    #[test]
    fn failed_save_keeps_new_meal_out_of_the_list() {
        let mut list = rejecting_list();
        let result = list.apply(
            EditTarget::New,
            FormOutcome::Saved(Meal::new("Pizza", "x").unwrap()),
        );
        assert!(matches!(result, Err(ListError::Storage(_))));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn failed_save_keeps_existing_meal_unchanged() {
        let mut list = rejecting_list();
        let result = list.apply(
            EditTarget::Existing(0),
            FormOutcome::Saved(Meal::new("Stew", "noon").unwrap()),
        );
        assert!(matches!(result, Err(ListError::Storage(_))));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&Meal::new("Soup", "noon").unwrap()));
    }

    #[test]
    fn failed_save_keeps_removed_meal() {
        let mut list = rejecting_list();
        assert!(matches!(list.remove(1), Err(ListError::Storage(_))));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some(&Meal::new("Salad", "night").unwrap()));
    }
}
