//! Sidebar expansion state.
//!
//! - [`SidebarState`] - shared by every node of one sidebar: which
//!   top-level section is expanded and whether the sidebar is shown on
//!   narrow viewports
//! - [`CollapseState`] - owned by a single nested folder
//! - [`ScrollLock`] - the page-scroll lock released when a link is followed

/// State shared by all nodes of one sidebar.
///
/// At most one top-level section is expanded at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    current: Option<usize>,
    open_on_mobile: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand top-level section `index`, collapsing every other one.
    pub fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }

    pub fn set_open_on_mobile(&mut self, open: bool) {
        self.open_on_mobile = open;
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn open_on_mobile(&self) -> bool {
        self.open_on_mobile
    }

    pub fn is_section_collapsed(&self, index: usize) -> bool {
        self.current != Some(index)
    }
}

/// Collapse flag of a nested folder. Starts collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: bool,
}

impl CollapseState {
    pub fn new() -> Self {
        Self { collapsed: true }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Open because the location moved under this folder. Never collapses.
    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    /// Manual toggle from a label click.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

impl Default for CollapseState {
    fn default() -> Self {
        Self::new()
    }
}

/// Page scroll lock held while the sidebar covers the page on mobile.
pub trait ScrollLock {
    fn lock(&self);
    /// Release the lock. Releasing an unlocked page is a no-op.
    fn unlock(&self);
    fn is_locked(&self) -> bool;
}

/// Effects of following a file link: hide the mobile sidebar and give
/// page scrolling back, whatever the lock state was.
pub fn follow_file_link(state: &mut SidebarState, lock: &impl ScrollLock) {
    state.set_open_on_mobile(false);
    lock.unlock();
}

/// Show or hide the sidebar on mobile, locking page scroll while shown.
pub fn toggle_mobile(state: &mut SidebarState, lock: &impl ScrollLock) {
    let open = !state.open_on_mobile();
    state.set_open_on_mobile(open);
    if open {
        lock.lock();
    } else {
        lock.unlock();
    }
}
