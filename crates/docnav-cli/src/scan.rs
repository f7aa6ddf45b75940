//! Content directory scanning.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use docnav_core::{Manifest, ResourceRecord};
use walkdir::{DirEntry, WalkDir};

use crate::frontmatter;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Walk `content_dir` and build a manifest of every file in it.
///
/// Entries are visited in file-name order and hidden entries are skipped.
/// Unreadable files and malformed front matter are reported on stderr and
/// the record is kept without metadata.
pub fn scan(content_dir: &Path) -> Result<Manifest> {
    let mut resources = Vec::new();

    let walker = WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", content_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(content_dir)
            .with_context(|| format!("{} is outside the content dir", entry.path().display()))?;
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let mut record = ResourceRecord::new(relative_path);
        if record.is_markdown() {
            match fs::read_to_string(entry.path()) {
                Ok(source) => match frontmatter::parse(&source) {
                    Ok(frontmatter) => record.frontmatter = frontmatter,
                    Err(e) => eprintln!("warning: {}: {}", record.relative_path, e),
                },
                Err(e) => eprintln!("warning: failed to read {}: {}", record.relative_path, e),
            }
        }
        resources.push(record);
    }

    Ok(Manifest { resources })
}
