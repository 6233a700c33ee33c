use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";
const CORRUPT_SUFFIX: &str = "corrupt";

/// Sibling staging path: `storage.json` becomes `storage.json.tmp`.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    with_suffix(path, TMP_SUFFIX)
}

/// Where an unreadable document is moved before a fresh one replaces it.
pub(crate) fn corrupt_path(path: &Path) -> PathBuf {
    with_suffix(path, CORRUPT_SUFFIX)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut target = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{suffix}"),
        None => suffix.to_string(),
    };
    target.set_extension(ext);
    target
}

/// Writes `data` to `path` by staging it in [`tmp_path`] and renaming over the target.
///
/// A failed write leaves any existing file at `path` untouched.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sibling_paths_extend_the_extension() {
        let path = Path::new("/data/storage.json");
        assert_eq!(tmp_path(path), Path::new("/data/storage.json.tmp"));
        assert_eq!(corrupt_path(path), Path::new("/data/storage.json.corrupt"));
        assert_eq!(tmp_path(Path::new("ledger")), Path::new("ledger.tmp"));
    }

    #[test]
    fn write_atomic_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        write_atomic(&path, "{}").unwrap();
        write_atomic(&path, r#"{"a":1}"#).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"a":1}"#);
        assert!(!tmp_path(&path).exists());
    }
}
