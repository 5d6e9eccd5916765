//! Environment configuration shared by the pollinate binaries.

pub mod constants;
pub mod env_utils;

pub use env_utils::{EnvError, get_data_generated_dir, get_pollinate_dir, get_records_dir};
