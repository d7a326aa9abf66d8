//! Input selection: where the ordered frame names come from.
//!
//! Exactly one source is used per run. Explicit lists keep their order,
//! which must already be capture order; no sorting is applied. Feature
//! stores carry no capture order, so their names come back sorted.

use std::path::{Path, PathBuf};

use crate::error::{PairError, PairResult};
use crate::storage::{FeatureStore, SqliteFeatureStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSource {
    /// Names supplied directly by the caller.
    List(Vec<String>),
    /// Text files with one image per line, concatenated in order.
    ListFiles(Vec<PathBuf>),
    /// SQLite feature store.
    Features(PathBuf),
}

impl NameSource {
    /// Selects the source from CLI-style options.
    pub fn from_options(image_lists: Vec<PathBuf>, features: Option<PathBuf>) -> PairResult<Self> {
        match (image_lists.is_empty(), features) {
            (false, None) => Ok(Self::ListFiles(image_lists)),
            (true, Some(features)) => Ok(Self::Features(features)),
            (true, None) => Err(PairError::InputSelection("neither".to_string())),
            (false, Some(_)) => Err(PairError::InputSelection(
                "both an image list and a feature store".to_string(),
            )),
        }
    }

    pub fn load(&self) -> PairResult<Vec<String>> {
        let names = match self {
            Self::List(names) => names.clone(),
            Self::ListFiles(paths) => {
                let mut names = Vec::new();
                for path in paths {
                    names.extend(parse_image_list(path)?);
                }
                names
            }
            Self::Features(path) => SqliteFeatureStore::open(path)?.image_names()?,
        };
        log::debug!("loaded {} image names from {:?}", names.len(), self);
        Ok(names)
    }
}

/// Reads an image list file.
pub fn parse_image_list(path: &Path) -> PairResult<Vec<String>> {
    let raw = std::fs::read_to_string(path).map_err(|e| PairError::io(path, e))?;
    Ok(parse_image_list_str(&raw))
}

/// One image per line; the first whitespace-separated token is the name and
/// any trailing columns (camera model, intrinsics) are ignored. Blank lines
/// and `#` comments are skipped.
pub fn parse_image_list_str(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
