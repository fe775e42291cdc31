//! Disk I/O helpers: load from file and atomic write.
//!
//! The rename-over approach is close to atomic on most platforms. On NTFS
//! (Windows) it's reliable; on FAT32 or network shares there are no hard
//! guarantees. If that matters to you, keep backups or use a real database.

use crate::error::{Error, Result};
use crate::serializer::Serializer;
use crate::user::User;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Reads and deserializes the snapshot at `path`. Returns an empty table if
/// the file is missing or empty (not an error); anything else that goes
/// wrong is surfaced so the caller can decide how loudly to complain.
pub fn load<S: Serializer>(path: &Path, serializer: &S) -> Result<Vec<User>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::Io(e.to_string())),
    };
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    serializer.deserialize(&bytes)
}

/// Write `bytes` to `<path>.tmp`, sync, then rename over `path`. A crash
/// mid-write leaves at worst a stale tmp file next to an intact snapshot,
/// never a truncated snapshot.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    let mut file = File::create(&tmp).map_err(|e| Error::Io(e.to_string()))?;
    file.write_all(bytes).map_err(|e| Error::Io(e.to_string()))?;
    file.sync_all().map_err(|e| Error::Io(e.to_string()))?;
    drop(file);
    std::fs::rename(&tmp, path).map_err(|e| Error::Io(e.to_string()))?;
    Ok(())
}
