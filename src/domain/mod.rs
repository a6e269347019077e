pub mod archive;
pub mod meal;

pub use archive::{decode, decode_value, encode, DecodeError, CREATION_TIME_KEY, NAME_KEY};
pub use meal::{Meal, MealError};
