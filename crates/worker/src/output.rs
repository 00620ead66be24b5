//! Output directory handling for exported snapshots.
//!
//! The directory holds at most one export at a time. Replacement is
//! delete-then-write and is not crash-safe: a crash between the two steps
//! leaves the directory empty until the next tick.

use std::path::{Path, PathBuf};

use catalog_core::types::Timestamp;

/// Extension of exported files. Only files with it are ever removed.
const EXPORT_EXTENSION: &str = "json";

/// File name for an export generated at `now`,
/// e.g. `products_20261015_120000.json`.
pub fn export_file_name(now: Timestamp) -> String {
    format!("products_{}.{EXPORT_EXTENSION}", now.format("%Y%m%d_%H%M%S"))
}

/// Remove every previous export from `dir`. A missing directory is not an
/// error. Returns the number of files removed.
pub async fn clear_exports(dir: &Path) -> std::io::Result<usize> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_export = path.extension().is_some_and(|ext| ext == EXPORT_EXTENSION);
        if is_export && entry.file_type().await?.is_file() {
            tokio::fs::remove_file(&path).await?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Replace the export in `dir` with `contents`, returning the new file path.
///
/// Steps: remove old exports, create the directory if absent, write the
/// timestamped file.
pub async fn replace_export(dir: &Path, now: Timestamp, contents: &str) -> std::io::Result<PathBuf> {
    let removed = clear_exports(dir).await?;
    if removed > 0 {
        tracing::debug!(removed, "Export: removed previous files");
    }

    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(export_file_name(now));
    tokio::fs::write(&path, contents).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 10, 15, 9, 4, 5).unwrap()
    }

    #[test]
    fn file_name_embeds_timestamp() {
        assert_eq!(export_file_name(now()), "products_20261015_090405.json");
    }

    #[tokio::test]
    async fn clear_missing_dir_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert_eq!(clear_exports(&missing).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn replace_creates_dir_and_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");

        let path = replace_export(&dir, now(), "{}").await.unwrap();

        assert_eq!(path, dir.join("products_20261015_090405.json"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn replace_removes_old_json_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::write(dir.join("products_20200101_000000.json"), "old").unwrap();
        std::fs::write(dir.join("other.json"), "old").unwrap();
        std::fs::write(dir.join("notes.txt"), "keep").unwrap();

        let path = replace_export(dir, now(), "new").await.unwrap();

        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["notes.txt", "products_20261015_090405.json"]);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }
}
