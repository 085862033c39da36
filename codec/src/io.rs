//! Fixture file storage.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CodecError, CodecResult};

/// Writes encoded fixture bytes to `path`, creating or truncating the file.
pub fn write_fixture(path: &Path, bytes: &[u8]) -> CodecResult<()> {
    fs::write(path, bytes).map_err(|err| CodecError::io(path, &err))?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Reads the full contents of a fixture file.
pub fn read_fixture(path: &Path) -> CodecResult<Vec<u8>> {
    let bytes = fs::read(path).map_err(|err| CodecError::io(path, &err))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
