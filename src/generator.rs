//! Shared orchestration glue for the generation flows.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// One generation flow.
///
/// Implementations run a linear pipeline: resolve inputs, optionally
/// acquire the upstream tree, load, transform, check the output path,
/// write. Any failure aborts the flow; nothing is retried.
pub trait Generator {
    fn generate(&self) -> anyhow::Result<()>;
}

/// Make `dest` absolute and create the directory if it is missing.
pub fn prepare_destination(dest: &Path) -> Result<PathBuf> {
    let dest = std::path::absolute(dest)?;
    fs::create_dir_all(&dest)?;
    Ok(dest)
}

/// Write-once gate: an existing output file is an error unless
/// `force` is set.
pub fn check_overwrite(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GenError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}
