use std::fs;
use std::path::Path;

use crate::error::Error;

pub fn read_collection_data(path: &Path) -> Result<Vec<u8>, Error> {
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.to_owned(),
        });
    }

    Ok(fs::read(path)?)
}

/// Whole-file, non-atomic write; artifacts are regenerable so a partial
/// file after a crash is acceptable. Parent directories are created as
/// needed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;

    Ok(())
}
