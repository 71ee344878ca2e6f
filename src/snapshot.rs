//! JSON export of a fetched snapshot and its plan.

use crate::error::{Error, Result};
use crate::normalize::ChangePlan;
use crate::types::{Milestone, StateFilter};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Contents of a snapshot export
#[derive(Debug, Serialize)]
pub struct SnapshotExport<'a> {
    /// `owner/name` of the repository
    pub repository: String,
    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
    /// State filter used for the fetch
    pub state: StateFilter,
    /// Milestones as fetched
    pub milestones: &'a [Milestone],
    /// Plan computed from `milestones`, if any
    pub plan: Option<&'a ChangePlan>,
}

/// Write `export` to `path` as pretty JSON.
///
/// The data goes to a temp file next to `path` first and is renamed into
/// place once complete. If anything fails, the temp file is removed when it
/// goes out of scope and `path` is left untouched. The binary handles Ctrl-C
/// by dropping the run (see [`crate::shutdown`]), so an interrupt releases
/// the temp file the same way.
pub fn save_snapshot(path: &Path, export: &SnapshotExport<'_>) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| Error::Snapshot(format!("failed to create temp file in {}: {e}", dir.display())))?;

    serde_json::to_writer_pretty(&mut tmp, export)
        .map_err(|e| Error::Snapshot(format!("failed to serialize snapshot: {e}")))?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;

    tmp.persist(path)
        .map_err(|e| Error::Snapshot(format!("failed to write {}: {}", path.display(), e.error)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::create_change_plan;
    use std::fs;
    use tempfile::TempDir;

    fn export<'a>(milestones: &'a [Milestone], plan: Option<&'a ChangePlan>) -> SnapshotExport<'a> {
        SnapshotExport {
            repository: "octo/site".to_string(),
            fetched_at: Utc::now(),
            state: StateFilter::All,
            milestones,
            plan,
        }
    }

    #[test]
    fn test_save_writes_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.json");
        let milestones = vec![Milestone::new(1, "M1"), Milestone::new(2, "Launch")];
        let plan = create_change_plan(&milestones);

        save_snapshot(&path, &export(&milestones, Some(&plan))).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["repository"], "octo/site");
        assert_eq!(value["milestones"].as_array().unwrap().len(), 2);
        assert_eq!(value["plan"]["entries"][0]["target_title"], "M0");
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.json");
        let milestones = vec![Milestone::new(1, "M1")];

        save_snapshot(&path, &export(&milestones, None)).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("snapshot.json")]);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("snapshot.json");
        let milestones = vec![Milestone::new(1, "M1")];

        let result = save_snapshot(&path, &export(&milestones, None));
        assert!(matches!(result, Err(Error::Snapshot(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_persist_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        // A directory at the destination makes the final rename fail.
        let path = temp.path().join("taken");
        fs::create_dir(&path).unwrap();
        let milestones = vec![Milestone::new(1, "M1")];

        assert!(save_snapshot(&path, &export(&milestones, None)).is_err());

        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
