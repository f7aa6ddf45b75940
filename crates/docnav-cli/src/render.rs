//! Plain-text rendering of the navigation tree.

use docnav_core::{FileOrFolder, sorted_children};

/// Render top-level sections and their sorted children, one node per line.
///
/// Folders end with `/`; every line carries the node's link path.
pub fn render_tree(sections: &[FileOrFolder]) -> String {
    let mut out = String::new();
    for section in sections {
        render_node(section, 0, &mut out);
    }
    out
}

fn render_node(node: &FileOrFolder, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        FileOrFolder::File(file) => {
            out.push_str(&format!("{}{}  {}\n", indent, file.label(), file.path));
        }
        FileOrFolder::Folder(folder) => {
            out.push_str(&format!("{}{}/  {}\n", indent, folder.label(), folder.path));
            for child in sorted_children(&folder.children) {
                render_node(&child, depth + 1, out);
            }
        }
    }
}
