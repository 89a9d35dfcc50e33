// src/download.rs
//
// Where exports go. `DirSink` writes into a directory through a temporary
// file that is either persisted under the final name or removed; no
// partial or orphaned file is left behind on any path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::export::Download;

pub trait DownloadSink {
    type Receipt;
    fn deliver(&mut self, download: Download) -> Result<Self::Receipt, ExportError>;
}

/// Save exports as files in `dir`.
#[derive(Clone, Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirSink {
    type Receipt = PathBuf;

    fn deliver(&mut self, download: Download) -> Result<PathBuf, ExportError> {
        trigger_download(&download, &self.dir)
    }
}

/// Collects downloads in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub downloads: Vec<Download>,
}

impl DownloadSink for MemorySink {
    type Receipt = ();

    fn deliver(&mut self, download: Download) -> Result<(), ExportError> {
        self.downloads.push(download);
        Ok(())
    }
}

/// Write `download` to `dir/<filename>`, replacing any previous export.
/// Returns the final path.
pub fn trigger_download(download: &Download, dir: &Path) -> Result<PathBuf, ExportError> {
    ensure_directory(dir)?;
    let target = dir.join(&download.filename);

    // Dropping `tmp` (any early return below) deletes the file.
    let mut tmp = tempfile::Builder::new()
        .prefix(".download-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(download.bytes())?;
    tmp.flush()?;
    // PersistError owns the temp file; keep only the io::Error so the file
    // is removed before we return.
    tmp.persist(&target).map_err(|e| e.error)?;

    logf!(
        "Download: {} ({}, {} bytes) → {}",
        download.filename, download.mime, download.content.len(), target.display()
    );
    Ok(target)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
