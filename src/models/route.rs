//! What the main pane shows for the current location.

use docnav_core::{FileNode, FileOrFolder, PathMatcher, find_file};

/// Content view resolved from a location and the navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// The resources landing path itself (with no index page), or the
    /// site root that serves the app.
    Index,
    /// A known resource page.
    Page(FileNode),
    /// Anything else, inside or outside the resources root.
    NotFound,
}

impl Route {
    pub fn resolve(location: &str, sections: &[FileOrFolder], root: &str) -> Self {
        if let Some(file) = find_file(sections, location) {
            return Self::Page(file.clone());
        }

        let location = location.trim_end_matches('/');
        if location.is_empty() || location == PathMatcher::new(root).root() {
            Self::Index
        } else {
            Self::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_core::{ResourceRecord, sidebar_sections};

    fn sections(paths: &[&str]) -> Vec<FileOrFolder> {
        let records: Vec<ResourceRecord> = paths.iter().map(|p| ResourceRecord::new(*p)).collect();
        sidebar_sections(&records, "/resources")
    }

    #[test]
    fn test_resolve_page() {
        let tree = sections(&["guides/setup.md"]);
        match Route::resolve("/resources/guides/setup", &tree, "/resources") {
            Route::Page(file) => assert_eq!(file.title, "setup"),
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_index() {
        let tree = sections(&["guides/setup.md"]);
        assert_eq!(Route::resolve("/resources", &tree, "/resources"), Route::Index);
        assert_eq!(Route::resolve("/resources/", &tree, "/resources"), Route::Index);
    }

    #[test]
    fn test_site_root_is_index() {
        let tree = sections(&["guides/setup.md"]);
        assert_eq!(Route::resolve("/", &tree, "/resources"), Route::Index);
        assert_eq!(Route::resolve("", &tree, "/resources"), Route::Index);
    }

    #[test]
    fn test_index_page_wins_over_landing() {
        let tree = sections(&["index.md"]);
        assert!(matches!(
            Route::resolve("/resources", &tree, "/resources"),
            Route::Page(_)
        ));
    }

    #[test]
    fn test_resolve_not_found() {
        let tree = sections(&["guides/setup.md"]);
        for location in ["/resources/guides", "/resources/nope", "/elsewhere"] {
            assert_eq!(Route::resolve(location, &tree, "/resources"), Route::NotFound);
        }
    }
}
