use crate::app::models::{CollectorConfig, FileEntry, ReadFailure, ScanOutcome};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub struct Scanner<'a> {
    config: &'a CollectorConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a CollectorConfig) -> Self {
        Self { config }
    }

    /// Walks the root depth-first, parents before children, and reads every
    /// file whose extension is allowed. A directory's own files come before
    /// anything inside its subdirectories. Ignored directories are pruned
    /// before the walker descends into them.
    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        let mut builder = WalkBuilder::new(&self.config.root);
        // No gitignore or hidden-file handling: only the configured names prune.
        builder.standard_filters(false).follow_links(false);

        // Files before subdirectories; the sort is stable, so unsorted mode keeps listing order.
        if self.config.sorted {
            builder.sort_by_file_path(|a, b| {
                a.is_dir()
                    .cmp(&b.is_dir())
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });
        } else {
            builder.sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()));
        }

        let ignore_dirs = self.config.ignore_dirs.clone();
        builder.filter_entry(move |entry| !is_ignored_dir(entry, &ignore_dirs));

        for result in builder.build() {
            match result {
                Ok(entry) => self.process_entry(&entry, &mut outcome),
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        log::debug!(
            "Scan of {:?} finished: {} entries, {} unreadable",
            self.config.root,
            outcome.entries.len(),
            outcome.failures.len()
        );
        outcome
    }

    fn process_entry(&self, entry: &DirEntry, outcome: &mut ScanOutcome) {
        let path = entry.path();

        // A root that is itself a file is not walked into.
        if entry.depth() == 0 {
            return;
        }

        let is_dir = entry.file_type().map_or(true, |ft| ft.is_dir());
        // Symlinks are not followed, but one pointing at a directory is still not a file.
        if is_dir || path.is_dir() {
            return;
        }

        if !self.is_allowed(path) {
            log::trace!("Skipping {:?}: extension not allowed", path);
            return;
        }

        match fs::read_to_string(path) {
            Ok(content) => outcome.entries.push(FileEntry {
                path: path.to_path_buf(),
                content,
            }),
            Err(e) => outcome.failures.push(ReadFailure {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    fn is_allowed(&self, path: &Path) -> bool {
        extension_of(path).map_or(false, |ext| self.config.allowed_extensions.contains(&ext))
    }
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &BTreeSet<String>) -> bool {
    // The root is always walked, whatever its name.
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
    is_dir
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| ignore_dirs.contains(name))
}

/// The text from the last dot of the file name, dot included. Leading-dot
/// names like `.mod` have no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
}
