//! Display ordering for navigation nodes.
//!
//! Two rules apply:
//!
//! - Children of a folder: an entry titled `intro` goes last, folders come
//!   before files, and ties keep their manifest order.
//! - Top-level sections: alphabetical by title using [`locale_compare`].
//!   The intro-last rule does not apply at this level.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::manifest::ResourceRecord;
use crate::tree::{FileOrFolder, build_tree};

/// Title that always sorts after its siblings.
pub const INTRO_TITLE: &str = "intro";

/// Position group of a folder child: folders, then files, then intro.
fn child_rank(node: &FileOrFolder) -> u8 {
    if node.title() == INTRO_TITLE {
        2
    } else if node.is_folder() {
        0
    } else {
        1
    }
}

/// Sort folder children in place (stable).
pub fn sort_children(children: &mut [FileOrFolder]) {
    children.sort_by_key(child_rank);
}

/// Sorted copy of a folder's children.
pub fn sorted_children(children: &[FileOrFolder]) -> Vec<FileOrFolder> {
    let mut sorted = children.to_vec();
    sort_children(&mut sorted);
    sorted
}

/// Sort top-level sections alphabetically by title (stable).
pub fn sort_top_level(nodes: &mut [FileOrFolder]) {
    nodes.sort_by(|a, b| locale_compare(a.title(), b.title()));
}

/// Build the tree for `records` under `root` with top-level sections sorted.
///
/// Nested children stay in manifest order; each folder sorts its own
/// children with [`sorted_children`] when rendered.
pub fn sidebar_sections(records: &[ResourceRecord], root: &str) -> Vec<FileOrFolder> {
    let mut sections = build_tree(records, root);
    sort_top_level(&mut sections);
    sections
}

/// Compare strings the way a browser's default collation does for titles.
///
/// Base letters decide first, ignoring accents and case. Then unaccented
/// sorts before accented, then lowercase before uppercase, then code
/// points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| lower(a).cmp(lower(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lower(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfc().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) if y.is_uppercase() => return Ordering::Less,
            (false, true) if x.is_uppercase() => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
