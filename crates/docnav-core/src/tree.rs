//! Navigation tree built from flat resource records.
//!
//! Records are inserted in manifest order. Folders are created on first
//! appearance of a path segment, so sibling order follows the manifest
//! until [`crate::order`] sorts it for display.
//!
//! # Path Convention
//!
//! - Root prefix: `/resources` (no trailing slash)
//! - Folder `guides`: `/resources/guides`
//! - File `guides/setup.md`: `/resources/guides/setup`
//! - File `guides/index.md`: `/resources/guides` (collapses onto its folder)

use crate::format::{humanize, join_path, normalize_path, segments, strip_extension};
use crate::manifest::ResourceRecord;

/// A content page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileNode {
    /// File stem, used for ordering (`intro` for `guides/intro.md`).
    pub title: String,
    /// Link target derived from the file's position in the tree.
    pub path: String,
    /// Path as it appears in the manifest, normalized.
    pub relative_path: String,
    /// Front-matter title, if the page declares one.
    pub doc_title: Option<String>,
    pub authors: Vec<String>,
    pub date: Option<String>,
}

impl FileNode {
    /// Display label: the front-matter title, else the humanized stem.
    pub fn label(&self) -> String {
        match self.doc_title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => humanize(&self.title),
        }
    }
}

/// A directory grouping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FolderNode {
    pub title: String,
    pub path: String,
    pub children: Vec<FileOrFolder>,
}

impl FolderNode {
    pub fn label(&self) -> String {
        humanize(&self.title)
    }
}

/// Node of the navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FileOrFolder {
    File(FileNode),
    Folder(FolderNode),
}

impl FileOrFolder {
    pub fn title(&self) -> &str {
        match self {
            Self::File(file) => &file.title,
            Self::Folder(folder) => &folder.title,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::File(file) => &file.path,
            Self::Folder(folder) => &folder.path,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::File(file) => file.label(),
            Self::Folder(folder) => folder.label(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

/// Incremental tree builder.
///
/// Non-Markdown records are ignored. A record whose link path is already
/// taken in the same folder is skipped and reported through [`skipped`].
///
/// [`skipped`]: TreeBuilder::skipped
#[derive(Debug)]
pub struct TreeBuilder {
    root: String,
    nodes: Vec<FileOrFolder>,
    skipped: Vec<String>,
}

impl TreeBuilder {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            nodes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Insert one record, creating its parent folders as needed.
    pub fn insert(&mut self, record: &ResourceRecord) {
        if !record.is_markdown() {
            return;
        }

        let relative_path = normalize_path(&record.relative_path);
        let stem_path = strip_extension(&relative_path);
        let parts: Vec<&str> = segments(stem_path).collect();
        let Some((title, folders)) = parts.split_last() else {
            return;
        };

        let path = link_path(&self.root, stem_path);
        let frontmatter = record.frontmatter.clone().unwrap_or_default();
        let file = FileNode {
            title: title.to_string(),
            path,
            relative_path: relative_path.clone(),
            doc_title: frontmatter.title,
            authors: frontmatter.authors,
            date: frontmatter.date,
        };

        let mut level = &mut self.nodes;
        for (depth, segment) in folders.iter().enumerate() {
            let existing = level
                .iter()
                .position(|n| matches!(n, FileOrFolder::Folder(f) if f.title == *segment));

            let index = match existing {
                Some(index) => index,
                None => {
                    level.push(FileOrFolder::Folder(FolderNode {
                        title: segment.to_string(),
                        path: join_path(&self.root, &folders[..=depth].join("/")),
                        children: Vec::new(),
                    }));
                    level.len() - 1
                }
            };

            let FileOrFolder::Folder(folder) = &mut level[index] else {
                return;
            };
            level = &mut folder.children;
        }

        let duplicate = level
            .iter()
            .any(|n| matches!(n, FileOrFolder::File(f) if f.path == file.path));
        if duplicate {
            self.skipped.push(relative_path);
            return;
        }

        level.push(FileOrFolder::File(file));
    }

    /// Relative paths of records dropped as duplicates.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn finish(self) -> Vec<FileOrFolder> {
        self.nodes
    }
}

/// Build the top-level node sequence for `records` under `root`.
pub fn build_tree(records: &[ResourceRecord], root: &str) -> Vec<FileOrFolder> {
    let mut builder = TreeBuilder::new(root);
    for record in records {
        builder.insert(record);
    }
    builder.finish()
}

/// Link paths of every Markdown record, in manifest order, without duplicates.
pub fn resource_paths(records: &[ResourceRecord], root: &str) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for record in records.iter().filter(|r| r.is_markdown()) {
        let relative_path = normalize_path(&record.relative_path);
        let path = link_path(root, strip_extension(&relative_path));
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

/// Find the file whose link path equals `location` (trailing slash ignored).
pub fn find_file<'a>(nodes: &'a [FileOrFolder], location: &str) -> Option<&'a FileNode> {
    let location = location.trim_end_matches('/');
    nodes.iter().find_map(|node| match node {
        FileOrFolder::File(file) if file.path == location => Some(file),
        FileOrFolder::File(_) => None,
        FileOrFolder::Folder(folder) => find_file(&folder.children, location),
    })
}

fn link_path(root: &str, stem_path: &str) -> String {
    let stem_path = match stem_path.rsplit_once('/') {
        Some((parent, "index")) => parent,
        None if stem_path == "index" => "",
        _ => stem_path,
    };
    join_path(root, stem_path)
}
