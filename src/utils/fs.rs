use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::CopyOptions;

use crate::utils::error::{BananaError, BananaResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BananaResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| BananaError::write(path.as_ref(), e))
}

/// Remove a directory and all its contents; a missing directory is not an error
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BananaResult<()> {
    match fs::remove_dir_all(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BananaError::write(path.as_ref(), e)),
    }
}

/// Write bytes to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> BananaResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents).map_err(|e| BananaError::write(path.as_ref(), e))
}

/// Copy the directory `from` so that it lands at `to`, replacing whatever
/// was there before
pub fn replace_directory<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> BananaResult<u64> {
    let to = to.as_ref();
    remove_directory(to)?;
    create_directory(to)?;

    let mut options = CopyOptions::new();
    options.content_only = true;

    fs_extra::dir::copy(from.as_ref(), to, &options).map_err(|e| {
        BananaError::write(to, io::Error::new(io::ErrorKind::Other, e.to_string()))
    })
}
