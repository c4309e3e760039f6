//! Timestamped copies of the store file with simple retention

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::config::TrunkPaths;
use crate::error::{TrunkError, TrunkResult};

/// How many backup files to keep; older ones are pruned
pub const BACKUP_RETENTION: usize = 10;

/// Copy the current store file into the backup directory
///
/// Returns the path of the new backup. Fails if there is no store file yet.
pub fn create_backup(paths: &TrunkPaths) -> TrunkResult<PathBuf> {
    if !paths.is_initialized() {
        return Err(TrunkError::Storage(
            "No data file to back up yet".to_string(),
        ));
    }
    let store_file = paths.store_file();

    fs::create_dir_all(paths.backup_dir())?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_path = paths.backup_dir().join(format!("store-{}.json", stamp));
    fs::copy(&store_file, &backup_path)?;

    prune_old_backups(paths)?;
    Ok(backup_path)
}

/// All backup files, oldest first
pub fn list_backups(paths: &TrunkPaths) -> TrunkResult<Vec<PathBuf>> {
    let dir = paths.backup_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut backups: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("store-") && n.ends_with(".json"))
        })
        .collect();

    // Timestamped names sort chronologically
    backups.sort();
    Ok(backups)
}

fn prune_old_backups(paths: &TrunkPaths) -> TrunkResult<()> {
    let backups = list_backups(paths)?;
    if backups.len() <= BACKUP_RETENTION {
        return Ok(());
    }

    for old in &backups[..backups.len() - BACKUP_RETENTION] {
        fs::remove_file(old)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_with_store() -> (TempDir, TrunkPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrunkPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        fs::write(paths.store_file(), "{}").unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_create_backup_copies_store() {
        let (_tmp, paths) = paths_with_store();
        let backup = create_backup(&paths).unwrap();

        assert!(backup.exists());
        assert_eq!(fs::read_to_string(backup).unwrap(), "{}");
    }

    #[test]
    fn test_backup_without_store_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrunkPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(create_backup(&paths).is_err());
    }

    #[test]
    fn test_list_backups_empty_without_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrunkPaths::with_base_dir(temp_dir.path().join("missing"));

        assert!(list_backups(&paths).unwrap().is_empty());
    }

    #[test]
    fn test_retention_prunes_oldest() {
        let (_tmp, paths) = paths_with_store();

        // Seed more files than the retention limit, with sortable stamps
        for i in 0..BACKUP_RETENTION + 3 {
            let name = format!("store-20240101-{:06}.json", i);
            fs::write(paths.backup_dir().join(name), "{}").unwrap();
        }

        prune_old_backups(&paths).unwrap();
        let remaining = list_backups(&paths).unwrap();

        assert_eq!(remaining.len(), BACKUP_RETENTION);
        // The oldest were removed
        assert!(remaining[0]
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .contains("000003"));
    }
}
