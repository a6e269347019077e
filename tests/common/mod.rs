#![allow(dead_code)]

use chrono::NaiveDate;
use food_tracker::time::FixedClock;
use std::path::Path;

use food_tracker::{config::Config, storage::JsonStorage};

pub const FIXED_STAMP: &str = "June 1, 2024 at 5:00:00 PM";

/// Clock frozen at 2024-06-01 17:00:00, rendered as [`FIXED_STAMP`].
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .expect("valid date")
            .and_hms_opt(17, 0, 0)
            .expect("valid time"),
    )
}

/// Archive storage rooted in `base` with default configuration.
pub fn storage_in(base: &Path) -> JsonStorage {
    JsonStorage::from_config(&Config::default(), base)
}
