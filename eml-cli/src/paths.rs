//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "app";
const ORGANIZATION: &str = "eml";
const APPLICATION: &str = "eml";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the data directory for persistent application data.
///
/// - Linux: `$XDG_DATA_HOME/eml` or `~/.local/share/eml`
/// - macOS: `~/Library/Application Support/app.eml.eml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\eml\eml\data`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the cache directory for logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the key-value storage database.
pub fn storage_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("storage.db"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "eml-";

/// Archived sessions kept beside `latest.log`.
const KEPT_ARCHIVES: usize = 25;

/// Archives the previous session's log and prunes the oldest archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(dir) = cache_dir() else { return };
    if let Err(e) = rotate_in(&dir, KEPT_ARCHIVES) {
        eprintln!("Failed to rotate logs in {}: {}", dir.display(), e);
    }
}

fn rotate_in(dir: &Path, keep: usize) -> io::Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let latest = dir.join(LATEST_LOG);
    if latest.is_file() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%3f");
        fs::rename(&latest, dir.join(format!("{}{}.log", ARCHIVE_PREFIX, stamp)))?;
    }

    for stale in archived_logs(dir)?.into_iter().skip(keep) {
        fs::remove_file(stale)?;
    }
    Ok(())
}

/// Archive files in `dir`, newest first. Stamps sort lexicographically.
fn archived_logs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"));
        if is_archive {
            archives.push(path);
        }
    }
    archives.sort_unstable_by(|a, b| b.cmp(a));
    Ok(archives)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name).unwrap();
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_latest_is_archived_and_oldest_pruned() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), LATEST_LOG);
        touch(dir.path(), "eml-20240101_000000000.log");
        touch(dir.path(), "eml-20240102_000000000.log");
        touch(dir.path(), "eml-20240103_000000000.log");
        touch(dir.path(), "notes.log");

        rotate_in(dir.path(), 2).unwrap();

        let archives = archived_logs(dir.path()).unwrap();
        assert_eq!(archives.len(), 2);
        assert_eq!(fs::read_to_string(&archives[0]).unwrap(), LATEST_LOG);
        assert!(archives[1].ends_with("eml-20240103_000000000.log"));

        let names = file_names(dir.path());
        assert!(!names.contains(&LATEST_LOG.to_string()));
        assert!(names.contains(&"notes.log".to_string()));
        assert!(!names.contains(&"eml-20240101_000000000.log".to_string()));
    }

    #[test]
    fn test_prunes_without_latest() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "eml-20240101_000000000.log");
        touch(dir.path(), "eml-20240102_000000000.log");

        rotate_in(dir.path(), 1).unwrap();

        assert_eq!(file_names(dir.path()), vec!["eml-20240102_000000000.log"]);
    }

    #[test]
    fn test_missing_dir_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rotate_in(&dir.path().join("absent"), 3).is_ok());
    }
}
