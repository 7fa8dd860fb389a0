use std::{
    fs::{read, write},
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::KgCoreError;

/// Writes a bincode snapshot of an index to disk.
///
/// Works for any of the four index representations. The snapshot format
/// is an implementation detail with no stability guarantee.
pub fn save_index<I, P>(index: &I, path: P) -> Result<(), KgCoreError>
where
    I: Serialize,
    P: AsRef<Path>,
{
    let bytes = bincode::serialize(index).map_err(|_| KgCoreError::Serialization)?;

    debug!("Writing {} bytes to {}", bytes.len(), path.as_ref().display());
    write(path, bytes)?;

    Ok(())
}

/// Reads an index snapshot back from disk.
///
/// All links inside a snapshot are plain row positions, so a loaded index
/// is usable as-is with no pointer reconstruction.
pub fn load_index<I, P>(path: P) -> Result<I, KgCoreError>
where
    I: DeserializeOwned,
    P: AsRef<Path>,
{
    let bytes = read(path)?;

    bincode::deserialize(&bytes).map_err(|_| KgCoreError::Deserialization)
}
