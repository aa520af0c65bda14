//! Filesystem-backed JSON implementation of the expense store.
//!
//! Each building's ledger lives in `<data_root>/<building>.json` as a flat
//! array of expense records. A missing file means the store simply has no
//! records for that building; a malformed file is a store error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use domus_core::{CoreError, ExpenseStore};
use domus_domain::ExpenseRecord;

const LEDGER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    data_root: PathBuf,
}

impl JsonExpenseStore {
    pub fn new(data_root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let data_root = data_root.into();
        fs::create_dir_all(&data_root).map_err(|err| CoreError::Store(err.to_string()))?;
        Ok(Self { data_root })
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn building_path(&self, building_id: &str) -> PathBuf {
        self.data_root.join(format!(
            "{}.{}",
            canonical_name(building_id),
            LEDGER_EXTENSION
        ))
    }

    /// Writes a building's full record set; used by import tooling and by
    /// tests that seed data.
    pub fn save_building(
        &self,
        building_id: &str,
        records: &[ExpenseRecord],
    ) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Store(err.to_string()))?;
        let path = self.building_path(building_id);
        let tmp = tmp_path(&path);
        fs::write(&tmp, json).map_err(|err| CoreError::Store(err.to_string()))?;
        fs::rename(&tmp, &path).map_err(|err| CoreError::Store(err.to_string()))?;
        Ok(())
    }

    pub fn list_buildings(&self) -> Result<Vec<String>, CoreError> {
        let mut names = Vec::new();
        let entries =
            fs::read_dir(&self.data_root).map_err(|err| CoreError::Store(err.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|err| CoreError::Store(err.to_string()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn expenses_for_building(&self, building_id: &str) -> Result<Vec<ExpenseRecord>, CoreError> {
        let path = self.building_path(building_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path).map_err(|err| CoreError::Store(err.to_string()))?;
        serde_json::from_str(&data)
            .map_err(|err| CoreError::Store(format!("{}: {}", path.display(), err)))
    }
}

/// Maps a building identifier onto a safe file stem.
fn canonical_name(building_id: &str) -> String {
    let sanitized: String = building_id
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "building".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
