//! End-to-end navigation behaviour without a browser.
//!
//! Wires the bus, shared sidebar state and per-folder collapse state the
//! same way the web components do, then drives it with navigations.

use std::cell::RefCell;
use std::rc::Rc;

use docnav_core::{
    CollapseState, FileOrFolder, LocationBus, Manifest, SidebarState, Subscription, find_file,
    resource_paths, sidebar_sections, sorted_children,
};

const MANIFEST: &str = r#"{
    "resources": [
        { "relativePath": "guides/intro.md", "frontmatter": { "title": "Start here" } },
        { "relativePath": "guides/setup.md" },
        { "relativePath": "guides/advanced/tuning.md", "frontmatter": { "authors": "Ada" } },
        { "relativePath": "API/client.md" },
        { "relativePath": "API/img/diagram.png" },
        { "relativePath": "faq.md" }
    ]
}"#;

struct MountedSidebar {
    state: Rc<RefCell<SidebarState>>,
    nested: Vec<(String, Rc<RefCell<CollapseState>>)>,
    _subscriptions: Vec<Subscription>,
}

fn mount(bus: &LocationBus, sections: &[FileOrFolder]) -> MountedSidebar {
    let state = Rc::new(RefCell::new(SidebarState::new()));
    let mut nested = Vec::new();
    let mut subscriptions = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        let FileOrFolder::Folder(folder) = section else {
            continue;
        };
        let shared = Rc::clone(&state);
        subscriptions.push(bus.subscribe(&folder.path, move || {
            shared.borrow_mut().set_current(index);
        }));
        mount_nested(bus, &folder.children, &mut nested, &mut subscriptions);
    }

    MountedSidebar {
        state,
        nested,
        _subscriptions: subscriptions,
    }
}

fn mount_nested(
    bus: &LocationBus,
    children: &[FileOrFolder],
    nested: &mut Vec<(String, Rc<RefCell<CollapseState>>)>,
    subscriptions: &mut Vec<Subscription>,
) {
    for child in sorted_children(children) {
        if let FileOrFolder::Folder(folder) = child {
            let collapse = Rc::new(RefCell::new(CollapseState::new()));
            let handle = Rc::clone(&collapse);
            subscriptions.push(bus.subscribe(&folder.path, move || {
                handle.borrow_mut().expand();
            }));
            nested.push((folder.path.clone(), collapse));
            mount_nested(bus, &folder.children, nested, subscriptions);
        }
    }
}

fn section_titles(sections: &[FileOrFolder]) -> Vec<&str> {
    sections.iter().map(|s| s.title()).collect()
}

#[test]
fn sections_and_children_are_ordered() {
    let manifest = Manifest::from_json(MANIFEST).expect("manifest should parse");
    let sections = sidebar_sections(&manifest.resources, "/resources");
    assert_eq!(section_titles(&sections), vec!["API", "faq", "guides"]);

    let FileOrFolder::Folder(guides) = &sections[2] else {
        panic!("guides should be a folder");
    };
    let children = sorted_children(&guides.children);
    assert_eq!(section_titles(&children), vec!["advanced", "setup", "intro"]);
    assert_eq!(children[2].label(), "Start here");
    assert_eq!(children[1].label(), "Setup");
}

#[test]
fn navigation_expands_matching_branch() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let sections = sidebar_sections(&manifest.resources, "/resources");
    let bus = LocationBus::new();
    let sidebar = mount(&bus, &sections);

    assert_eq!(sidebar.state.borrow().current(), None);
    assert!(sidebar.nested.iter().all(|(_, c)| c.borrow().is_collapsed()));

    bus.publish("/resources/guides/advanced/tuning");
    let state = *sidebar.state.borrow();
    assert_eq!(state.current(), Some(2));
    assert!(state.is_section_collapsed(0));
    assert!(!state.is_section_collapsed(2));
    let (path, advanced) = &sidebar.nested[0];
    assert_eq!(path, "/resources/guides/advanced");
    assert!(!advanced.borrow().is_collapsed());

    // Leaving the branch switches sections but never re-collapses nested folders.
    bus.publish("/resources/API/client");
    let state = *sidebar.state.borrow();
    assert_eq!(state.current(), Some(0));
    assert!(state.is_section_collapsed(2));
    assert!(!advanced.borrow().is_collapsed());
}

#[test]
fn unknown_location_changes_nothing() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let sections = sidebar_sections(&manifest.resources, "/resources");
    let bus = LocationBus::new();
    let sidebar = mount(&bus, &sections);

    bus.publish("/resources/nowhere/at/all");
    bus.publish("/blog/guides");
    assert_eq!(sidebar.state.borrow().current(), None);
    assert!(sidebar.nested.iter().all(|(_, c)| c.borrow().is_collapsed()));
    assert!(find_file(&sections, "/resources/nowhere/at/all").is_none());
}

#[test]
fn unmount_releases_subscriptions() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let sections = sidebar_sections(&manifest.resources, "/resources");
    let bus = LocationBus::new();

    let sidebar = mount(&bus, &sections);
    assert_eq!(bus.subscriber_count(), 3);
    let state = Rc::clone(&sidebar.state);
    drop(sidebar);

    assert_eq!(bus.subscriber_count(), 0);
    bus.publish("/resources/guides/setup");
    assert_eq!(state.borrow().current(), None);
}

#[test]
fn remount_picks_up_current_location() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let sections = sidebar_sections(&manifest.resources, "/resources");
    let bus = LocationBus::new();
    bus.publish("/resources/guides/setup");

    let sidebar = mount(&bus, &sections);
    assert_eq!(sidebar.state.borrow().current(), Some(2));
}

#[test]
fn known_paths_cover_markdown_pages() {
    let manifest = Manifest::from_json(MANIFEST).unwrap();
    let paths = resource_paths(&manifest.resources, "/resources");
    assert_eq!(
        paths,
        vec![
            "/resources/guides/intro",
            "/resources/guides/setup",
            "/resources/guides/advanced/tuning",
            "/resources/API/client",
            "/resources/faq",
        ]
    );
}
