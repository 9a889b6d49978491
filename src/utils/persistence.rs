//! Generic JSON persistence helpers for ~/.ecoquest/ save files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::STORAGE_DIR;

/// Get the ~/.ecoquest/ directory path, creating it if needed.
pub fn ecoquest_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(STORAGE_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.ecoquest/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(ecoquest_dir()?.join(filename))
}

/// Save a value as pretty-printed JSON to `path`, creating parent directories.
///
/// Writes to a sibling temp file first and renames it over the target so a
/// crash mid-write leaves the previous save intact.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_dir(label: &str) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "ecoquest-{}-{}-{}",
        label,
        std::process::id(),
        id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".ecoquest/test.json"));
    }

    #[test]
    fn test_save_creates_parents_and_cleans_tmp() {
        let dir = test_dir("roundtrip");
        let path = dir.join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, data);
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = test_dir("overwrite");
        let path = dir.join("data.json");
        save_json(&path, &1u32).unwrap();
        save_json(&path, &2u32).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");

        fs::remove_dir_all(dir).ok();
    }
}
