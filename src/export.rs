use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::models::FileRecord;
use chrono::Utc;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// Packages the selected records into a zip archive named
/// `{label}_{timestamp}.zip` under `output_dir`.
///
/// One entry per record, named by the record's path, holding a fixed textual
/// rendering of its metadata (the catalog stores no file contents), followed
/// by a `manifest.json` entry summarizing the export. Resolution is strict:
/// every requested id must exist or the whole export fails, and a failed
/// attempt may leave a partial file behind that callers must discard.
pub fn export_archive(
    db: &Database,
    label: &str,
    file_ids: &[i64],
    output_dir: &Path,
) -> AppResult<PathBuf> {
    if label.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "export label must be non-empty".to_string(),
        ));
    }
    if file_ids.is_empty() {
        return Err(AppError::InvalidRequest(
            "at least one file id is required for export".to_string(),
        ));
    }

    let files = db.get_files_by_ids(file_ids)?;
    if files.len() != file_ids.len() {
        let found: HashSet<i64> = files.iter().map(|file| file.id).collect();
        let missing: Vec<String> = file_ids
            .iter()
            .filter(|id| !found.contains(id))
            .map(|id| id.to_string())
            .collect();
        return Err(AppError::DataAccess(format!(
            "export {label}: unknown file ids [{}]",
            missing.join(", ")
        )));
    }

    fs::create_dir_all(output_dir).map_err(|error| {
        AppError::DataAccess(format!(
            "create export directory {}: {error}",
            output_dir.display()
        ))
    })?;

    let created_at = Utc::now();
    let archive_name = format!("{label}_{}.zip", created_at.format("%Y%m%d_%H%M%S"));
    let archive_path = output_dir.join(&archive_name);

    let archive_file = File::create(&archive_path).map_err(|error| {
        AppError::DataAccess(format!(
            "create archive {}: {error}",
            archive_path.display()
        ))
    })?;
    let mut archive = zip::ZipWriter::new(archive_file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut total_size: i64 = 0;
    for record in &files {
        archive.start_file(record.path.as_str(), options)?;
        archive.write_all(render_metadata(record).as_bytes())?;
        total_size += record.size;
    }

    archive.start_file("manifest.json", options)?;
    let manifest = serde_json::json!({
        "production_request_id": label,
        "created_at": created_at.to_rfc3339(),
        "file_count": files.len(),
        "total_size": total_size,
    });
    archive.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;
    archive.finish()?;

    tracing::info!(
        label,
        file_count = files.len(),
        total_size,
        path = %archive_path.display(),
        "export archive written"
    );

    Ok(archive_path)
}

fn render_metadata(record: &FileRecord) -> String {
    format!(
        "File: {}\nDirectory: {}\nCategory: {}\nDate: {}\nSize: {} bytes\nPrivileged: {}\nDuplicate Hash: {}\n",
        record.file_name,
        record.directory,
        record.category.as_str(),
        record.date.to_rfc3339(),
        record.size,
        record.privileged,
        record.duplicate_hash.as_deref().unwrap_or(""),
    )
}
