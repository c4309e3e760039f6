//! Local backups of the data file

pub mod manager;

pub use manager::{create_backup, list_backups, BACKUP_RETENTION};
