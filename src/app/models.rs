use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub root: PathBuf,
    pub allowed_extensions: BTreeSet<String>, // Each with its leading dot, e.g. ".go"
    pub ignore_dirs: BTreeSet<String>,
    pub output: PathBuf,
    pub sorted: bool,
}

/// Represents a single file whose content made it into the artifact.
#[derive(Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}

/// A qualifying file that could not be read as UTF-8 text.
#[derive(Debug)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading {}: {}", self.path.display(), self.message)
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub entries: Vec<FileEntry>,
    pub failures: Vec<ReadFailure>,
}
