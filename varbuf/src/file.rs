//! Loading and saving buffers as files
//!
//! Files hold raw buffer bytes with no header. Loading maps the file with
//! `memmap2` and copies the mapped bytes into a fresh buffer, so the result
//! never aliases the file.

use crate::{BufferData, Result};
use memmap2::MmapOptions;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Handle for a buffer persisted on disk
#[derive(Debug, Clone)]
pub struct BufferFile {
    path: PathBuf,
}

impl BufferFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a new buffer with its cursor at 0
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BufferData> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        // Zero-length files cannot be mapped on every platform
        if len == 0 {
            tracing::debug!(path = %path.display(), "loaded empty buffer file");
            return Ok(BufferData::new());
        }

        // SAFETY: the mapping is only read while `file` is open and the bytes
        // are copied out before it is dropped. Concurrent truncation by another
        // process is outside what this loader guards against.
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        let buffer = BufferData::from_bytes(&mmap[..]);

        tracing::debug!(path = %path.display(), bytes = buffer.len(), "loaded buffer file");
        Ok(buffer)
    }

    /// Write every byte of `buffer` to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(path: P, buffer: &BufferData) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(buffer.as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %path.display(), bytes = buffer.len(), "saved buffer file");
        Ok(())
    }

    /// Load the file this handle points to
    pub fn read(&self) -> Result<BufferData> {
        Self::load(&self.path)
    }

    /// Save `buffer` to the file this handle points to
    pub fn write(&self, buffer: &BufferData) -> Result<()> {
        Self::save(&self.path, buffer)
    }
}
