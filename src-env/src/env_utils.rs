//! Environment variable utilities for pollinate
//!
//! This module resolves the `POLLINATE_DIR` variable that points to the
//! project root, and the directories derived from it where run traces are
//! written.

use crate::constants::{DATA_GENERATED, POLLINATE_DIR, RECORDS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "POLLINATE_DIR environment variable is not set. Please set it to the project root directory (e.g., export POLLINATE_DIR=/path/to/pollinate)"
    )]
    PollinateDirNotSet,

    #[error("POLLINATE_DIR points to a non-existent directory: {0}")]
    PollinateDirNotFound(PathBuf),

    #[error("Failed to create data_generated directory: {0}")]
    DataGeneratedCreationFailed(std::io::Error),
}

/// Validate a raw `POLLINATE_DIR` value.
pub fn resolve_pollinate_dir(value: Option<String>) -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(value.ok_or(EnvError::PollinateDirNotSet)?);
    if !path.exists() {
        return Err(EnvError::PollinateDirNotFound(path));
    }
    Ok(path)
}

/// Get the POLLINATE_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - POLLINATE_DIR is not set
/// - POLLINATE_DIR points to a non-existent directory
pub fn get_pollinate_dir() -> Result<PathBuf, EnvError> {
    resolve_pollinate_dir(env::var(POLLINATE_DIR).ok())
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path).map_err(EnvError::DataGeneratedCreationFailed)?;
    }
    Ok(path)
}

/// `<root>/data_generated`, created if necessary.
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// `<root>/data_generated/records`, created if necessary.
pub fn records_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(data_generated_dir_in(root)?.join(RECORDS))
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// ```no_run
/// use pollinate_env::env_utils::get_data_generated_dir;
///
/// let data_dir = get_data_generated_dir()?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), pollinate_env::env_utils::EnvError>(())
/// ```
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_dir_in(&get_pollinate_dir()?)
}

/// Get the path to the records subdirectory within data_generated
///
/// This is where optimization traces go by default.
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    records_dir_in(&get_pollinate_dir()?)
}
