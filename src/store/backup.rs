//! Backup document: all collections + settings in one transportable JSON
//! file, optionally wrapped in a .zip archive.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::errors::{AppError, AppResult};
use crate::models::{AdvanceEntry, ExpenseEntry, PartialSettings, UserSettings, WorkEntry};
use crate::store::Store;

/// Wire format of a backup. Field names are part of the document format
/// and stay camelCase regardless of the in-memory naming.
///
/// `workEntries`, `advances` and `settings` are mandatory; `expenses` was
/// added later and defaults to empty so older backups keep restoring.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub work_entries: Vec<WorkEntry>,
    pub advances: Vec<AdvanceEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    pub settings: PartialSettings,
    #[serde(default)]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
}

/// Snapshot the whole store into a document.
pub fn export_document(store: &Store) -> BackupDocument {
    let settings = store.settings();
    BackupDocument {
        work_entries: store.work_log().entries(),
        advances: store.advances(),
        expenses: store.expenses(),
        settings: to_partial(&settings),
        exported_at: Some(chrono::Utc::now().to_rfc3339()),
        app_version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn to_partial(s: &UserSettings) -> PartialSettings {
    PartialSettings {
        daily_rate: Some(s.daily_rate),
        worker_name: Some(s.worker_name.clone()),
        employer_name: Some(s.employer_name.clone()),
        currency: Some(s.currency.clone()),
        theme: Some(s.theme),
        notification_enabled: Some(s.notification_enabled),
        notification_time: Some(s.notification_time.clone()),
        billing_cycle_start: s.billing_cycle_start,
    }
}

/// Parse and validate a document. A payload missing any mandatory section
/// is rejected here, before anything touches the store.
pub fn parse_document(json: &str) -> AppResult<BackupDocument> {
    serde_json::from_str(json).map_err(|e| AppError::InvalidBackup(e.to_string()))
}

/// Overwrite every local collection from a validated document.
pub fn apply_document(store: &Store, doc: &BackupDocument) -> AppResult<()> {
    let log = crate::models::WorkLog::from_entries(doc.work_entries.clone());
    store.save_work_log(&log)?;
    store.save_advances(&doc.advances)?;
    store.save_expenses(&doc.expenses)?;
    store.save_settings(&UserSettings::merged(doc.settings.clone()))?;
    Ok(())
}

/// Write the document to disk, as pretty JSON or a .zip around it.
/// Returns the final path (differs from `dest` when compressing).
pub fn write_backup_file(doc: &BackupDocument, dest: &Path, compress: bool) -> AppResult<PathBuf> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| AppError::Other(e.to_string()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if !compress {
        fs::write(dest, json)?;
        return Ok(dest.to_path_buf());
    }

    let zip_path = dest.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let inner_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wagelog-backup.json".to_string());

    zip.start_file(inner_name, options)
        .map_err(std::io::Error::other)?;
    zip.write_all(json.as_bytes())?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

/// Read a backup file back into its JSON text. Accepts both the plain
/// .json form and the .zip wrapper produced by `write_backup_file`.
pub fn read_backup_file(path: &Path) -> AppResult<String> {
    let is_zip = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));

    if !is_zip {
        return Ok(fs::read_to_string(path)?);
    }

    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(std::io::Error::other)?;
    if archive.is_empty() {
        return Err(AppError::InvalidBackup("empty archive".to_string()));
    }
    let mut entry = archive.by_index(0).map_err(std::io::Error::other)?;
    let mut json = String::new();
    entry.read_to_string(&mut json)?;
    Ok(json)
}
