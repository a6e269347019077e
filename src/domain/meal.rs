use thiserror::Error;

/// Validation failures raised while constructing a [`Meal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealError {
    #[error("meal name must not be empty")]
    EmptyName,
}

/// A named meal together with the moment it was recorded.
///
/// The creation time is free-form display text; it is stored exactly as
/// supplied and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    creation_time: String,
}

impl Meal {
    /// Creates a meal, rejecting an empty name. Both values are kept verbatim.
    pub fn new(
        name: impl Into<String>,
        creation_time: impl Into<String>,
    ) -> Result<Self, MealError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MealError::EmptyName);
        }
        Ok(Self {
            name,
            creation_time: creation_time.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creation_time(&self) -> &str {
        &self.creation_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_both_fields_verbatim() {
        let meal = Meal::new("Spaghetti", "June 1, 2024 at 5:00 PM").unwrap();
        assert_eq!(meal.name(), "Spaghetti");
        assert_eq!(meal.creation_time(), "June 1, 2024 at 5:00 PM");
    }

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(Meal::new("", "anytime"), Err(MealError::EmptyName));
    }

    #[test]
    fn whitespace_name_is_not_trimmed() {
        let meal = Meal::new("  Soup ", "").unwrap();
        assert_eq!(meal.name(), "  Soup ");
        assert_eq!(meal.creation_time(), "");
    }

    #[test]
    fn any_non_empty_name_is_accepted_regardless_of_creation_time() {
        for name in [" ", "a", "Pizza", "冷やし中華"] {
            for time in ["", "now", "June 1, 2024 at 5:00:00 PM"] {
                assert!(Meal::new(name, time).is_ok(), "{name:?} / {time:?}");
            }
        }
    }
}
