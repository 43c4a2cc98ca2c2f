//! ZIP archive operations: create an archive holding one entry, extract
//! one named entry, inspect a path, delete the archive.

use crate::error::{DeskError, Result};
use crate::ops::{CmdMessage, CmdResult};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Create (or truncate) the archive and add `source` under its base
/// name. If the source cannot be read the archive handle is still
/// finished, so a possibly entry-less archive stays behind on disk.
pub fn create(archive: &Path, source: &Path) -> Result<CmdResult> {
    let entry_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| DeskError::Input(format!("no base name in path: {}", source.display())))?;

    let file = File::create(archive)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut source_file = match File::open(source) {
        Ok(source_file) => source_file,
        Err(err) => {
            writer.finish().ok();
            return Err(err.into());
        }
    };
    if let Err(err) = writer.start_file(entry_name.as_str(), options) {
        writer.finish().ok();
        return Err(err.into());
    }
    if let Err(err) = io::copy(&mut source_file, &mut writer) {
        writer.finish().ok();
        return Err(err.into());
    }
    writer.finish()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "ZIP archive created: {}",
        archive.display()
    )));
    result.add_message(CmdMessage::success(format!(
        "File added to ZIP: {}",
        source.display()
    )));
    Ok(result)
}

/// Extract the named entry into `dest`, writing a same-named file. A
/// missing archive or entry is a reported failure.
pub fn extract(archive: &Path, entry: &str, dest: &Path) -> Result<CmdResult> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;
    let mut stored = zip.by_name(entry)?;

    let target = dest.join(entry);
    let mut out = File::create(&target)?;
    io::copy(&mut stored, &mut out)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Extracted file: {}",
        target.display()
    )));
    Ok(result)
}

/// Report base name and byte size for an existing path.
pub fn info(path: &Path) -> Result<CmdResult> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let result = CmdResult::default().with_lines(vec![
        format!("File: {}", name),
        format!("Size: {} bytes", metadata.len()),
    ]);
    Ok(result)
}

/// Remove the archive file.
pub fn delete(path: &Path) -> Result<CmdResult> {
    fs::remove_file(path)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "ZIP archive deleted: {}",
        path.display()
    )));
    Ok(result)
}
