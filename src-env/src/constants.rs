/// Environment variable naming the project root
pub const POLLINATE_DIR: &str = "POLLINATE_DIR";

/// Directory, relative to the project root, receiving generated artifacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` holding optimization traces
pub const RECORDS: &str = "records";
