use crate::app::models::FileEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Each entry contributes a header, its raw content and a lone newline;
    /// everything is then joined with newlines.
    pub fn generate_content(entries: &[FileEntry]) -> String {
        let mut lines = Vec::with_capacity(entries.len() * 3);

        for entry in entries {
            lines.push(format!("--- FILE: {} ---", entry.path.display()));
            lines.push(entry.content.clone());
            lines.push("\n".to_string());
        }

        lines.join("\n")
    }

    /// Replaces whatever is at `path` in a single write.
    pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write context file {:?}", path))
    }
}
