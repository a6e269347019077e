use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{encode_all, LoadReport, MealStore, Result};
use crate::{config::Config, domain::Meal, errors::StorageError};

pub const ARCHIVE_TMP_SUFFIX: &str = "tmp";

/// Stores the meal collection as a JSON array in a single archive file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Archive named by `config` inside `base`.
    pub fn from_config(config: &Config, base: &Path) -> Self {
        Self::new(config.archive_path(base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MealStore for JsonStorage {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No meal archive yet.");
            return Ok(LoadReport::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&data)?;
        let Value::Array(entries) = value else {
            return Err(StorageError::MalformedArchive(format!(
                "`{}` does not hold a list of meals",
                self.path.display()
            )));
        };
        let report = LoadReport::from_entries(&entries);
        tracing::info!(
            path = %self.path.display(),
            meals = report.meals.len(),
            rejected = report.rejected.len(),
            "Loaded meal archive."
        );
        Ok(report)
    }

    /// Writes the archive atomically by staging to a temporary file.
    fn save(&mut self, meals: &[Meal]) -> Result<()> {
        let json = serde_json::to_string_pretty(&encode_all(meals))?;
        let tmp = tmp_path(&self.path);
        let staged = write_atomic(&tmp, &json)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(StorageError::from));
        if let Err(err) = staged {
            discard_tmp(&tmp);
            return Err(err);
        }
        tracing::info!(path = %self.path.display(), meals = meals.len(), "Saved meal archive.");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, ARCHIVE_TMP_SUFFIX),
        None => ARCHIVE_TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Best-effort removal of a staging file left by a failed save.
fn discard_tmp(tmp: &Path) {
    if tmp.is_file() {
        if let Err(err) = fs::remove_file(tmp) {
            tracing::warn!(path = %tmp.display(), error = %err, "Could not remove staging file.");
        }
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
