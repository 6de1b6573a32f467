use std::sync::{
    Arc, RwLock,
    atomic::{AtomicBool, Ordering},
};

use ratatui::widgets::ListState;

use crate::{
    error::{FolioError, FolioResult},
    profile::Profile,
    roster::Roster,
};

/// Full-screen pages hosted by the shell. The profile detail view is
/// not a page: it is an overlay drawn on top of whichever page is
/// active while the selection machine is open.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Directory,
    Help,
}

/// The selection machine: at most one open profile id plus a
/// visibility flag. `close` retains the last id, so the machine has
/// exactly two observable states, Closed and Open(id).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<String>,
    visible: bool,
}

impl SelectionState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Page-wide toggle that freezes background navigation while the
/// detail overlay is up.
///
/// Acquiring returns an RAII guard; the lock is held for exactly as
/// long as some guard is alive, so it cannot leak even when the shell
/// is torn down with the overlay still open.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.locked.store(true, Ordering::Release);
        ScrollLockGuard {
            locked: self.locked.clone(),
        }
    }
}

pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}

/// The page shell: sole owner of the selection machine and the scroll
/// lock. Views read state through `&self` accessors and request
/// transitions through `open`/`close`; they never mutate it directly.
pub struct App {
    roster: Roster,

    current_page: Arc<RwLock<Page>>,
    previous_pages: Arc<RwLock<Vec<Page>>>,

    directory_nav: Arc<RwLock<ListState>>,

    selection: Arc<RwLock<SelectionState>>,
    scroll_lock: ScrollLock,
    lock_guard: Arc<RwLock<Option<ScrollLockGuard>>>,

    modal_scroll: Arc<RwLock<u16>>,
    modal_scroll_max: Arc<RwLock<u16>>,
}

impl App {
    pub fn new(roster: Roster) -> Self {
        let mut directory_nav = ListState::default();
        directory_nav.select(Some(0));

        Self {
            roster,

            current_page: Arc::new(RwLock::new(Page::Directory)),
            previous_pages: Arc::new(RwLock::new(Vec::new())),

            directory_nav: Arc::new(RwLock::new(directory_nav)),

            selection: Arc::new(RwLock::new(SelectionState::default())),
            scroll_lock: ScrollLock::new(),
            lock_guard: Arc::new(RwLock::new(None)),

            modal_scroll: Arc::new(RwLock::new(0)),
            modal_scroll_max: Arc::new(RwLock::new(0)),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Opens the detail overlay for `id`.
    ///
    /// Unknown ids are rejected and leave the selection and the lock
    /// untouched; tile-driven opens derive their id from the roster,
    /// so hitting the error means a wiring bug somewhere.
    pub fn open(&self, id: &str) -> FolioResult<()> {
        if self.roster.get(id).is_none() {
            return Err(FolioError::UnknownProfile(id.to_string()));
        }

        let mut selection = self.selection.write().unwrap();
        selection.selected = Some(id.to_string());
        selection.visible = true;

        // Re-opening while already open keeps the existing guard; the
        // lock stays held across the content swap.
        let mut guard = self.lock_guard.write().unwrap();
        if guard.is_none() {
            *guard = Some(self.scroll_lock.acquire());
        }

        *self.modal_scroll.write().unwrap() = 0;
        log::debug!("opened profile '{id}'");

        Ok(())
    }

    /// Closes the detail overlay and releases the scroll lock.
    /// Idempotent; the last selected id is retained.
    pub fn close(&self) {
        self.selection.write().unwrap().visible = false;
        self.lock_guard.write().unwrap().take();
        *self.modal_scroll.write().unwrap() = 0;
        log::debug!("closed profile overlay");
    }

    /// The profile currently shown in the overlay, if any. Pure read:
    /// `open` only accepts roster ids and the roster is immutable, so
    /// a visible selection always resolves.
    pub fn current_profile(&self) -> Option<&Profile> {
        let selection = self.selection.read().unwrap();
        if !selection.visible {
            return None;
        }
        selection
            .selected
            .as_deref()
            .and_then(|id| self.roster.get(id))
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.read().unwrap().clone()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    // Page navigation

    pub fn navigate_to(&self, page: Page) {
        let mut current_page = self.current_page.write().unwrap();
        let mut previous_pages = self.previous_pages.write().unwrap();
        previous_pages.push(current_page.clone());
        *current_page = page;
    }

    pub fn go_back(&self) {
        let mut current_page = self.current_page.write().unwrap();
        if let Some(previous) = self.previous_pages.write().unwrap().pop() {
            *current_page = previous;
        }
    }

    pub fn has_previous_page(&self) -> bool {
        !self.previous_pages.read().unwrap().is_empty()
    }

    pub fn get_current_page(&self) -> Page {
        self.current_page.read().unwrap().clone()
    }

    // Directory cursor

    pub fn directory_nav(&self) -> &Arc<RwLock<ListState>> {
        &self.directory_nav
    }

    pub fn directory_select_next(&self) {
        let len = self.roster.len();
        let mut nav = self.directory_nav.write().unwrap();
        let selected = nav.selected().unwrap_or(0);
        nav.select(Some(if selected + 1 < len { selected + 1 } else { 0 }));
    }

    pub fn directory_select_previous(&self) {
        let len = self.roster.len();
        let mut nav = self.directory_nav.write().unwrap();
        let selected = nav.selected().unwrap_or(0);
        nav.select(Some(if selected > 0 { selected - 1 } else { len - 1 }));
    }

    /// Opens the profile under the directory cursor.
    pub fn open_under_cursor(&self) -> FolioResult<()> {
        let selected = self.directory_nav.read().unwrap().selected().unwrap_or(0);
        let id = self
            .roster
            .profiles()
            .get(selected)
            .map(|p| p.id.clone())
            .ok_or_else(|| FolioError::UnknownProfile(format!("#{selected}")))?;
        self.open(&id)
    }

    /// Swaps the open overlay to the next roster profile, wrapping
    /// around. Direct Open(id) → Open(id') transition, no intermediate
    /// close.
    pub fn open_next(&self) -> FolioResult<()> {
        self.open_offset(1)
    }

    /// Swaps the open overlay to the previous roster profile.
    pub fn open_previous(&self) -> FolioResult<()> {
        self.open_offset(self.roster.len().saturating_sub(1))
    }

    fn open_offset(&self, offset: usize) -> FolioResult<()> {
        let current = match self.current_profile() {
            Some(profile) => profile,
            None => return Ok(()),
        };
        let position = self
            .roster
            .position(&current.id)
            .expect("current profile comes from the roster");
        let next = (position + offset) % self.roster.len();
        let id = self.roster.profiles()[next].id.clone();
        self.open(&id)
    }

    // Overlay scrolling

    pub fn modal_scroll(&self) -> u16 {
        *self.modal_scroll.read().unwrap()
    }

    pub fn modal_scroll_up(&self) {
        let mut scroll = self.modal_scroll.write().unwrap();
        *scroll = scroll.saturating_sub(1);
    }

    pub fn modal_scroll_down(&self) {
        let max = *self.modal_scroll_max.read().unwrap();
        let mut scroll = self.modal_scroll.write().unwrap();
        if *scroll < max {
            *scroll += 1;
        }
    }

    /// Records the scroll ceiling for the overlay as last rendered.
    /// The overlay wraps long lines to the modal width, so the ceiling
    /// depends on the frame size and is refreshed on every draw; the
    /// current offset is clamped in case the terminal shrank.
    pub fn set_modal_scroll_max(&self, max: u16) {
        *self.modal_scroll_max.write().unwrap() = max;
        let mut scroll = self.modal_scroll.write().unwrap();
        if *scroll > max {
            *scroll = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Roster::builtin())
    }

    #[test]
    fn initial_state_is_closed_and_unlocked() {
        let app = app();
        assert_eq!(app.selection(), SelectionState::default());
        assert!(app.current_profile().is_none());
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn open_then_current_profile_returns_that_profile() {
        let app = app();
        for id in ["mira", "devan", "sofia"] {
            app.open(id).unwrap();
            assert_eq!(app.current_profile().unwrap().id, id);
        }
    }

    #[test]
    fn open_acquires_lock_and_close_releases_it() {
        let app = app();
        app.open("mira").unwrap();
        assert!(app.is_scroll_locked());
        app.close();
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn close_is_idempotent_and_retains_last_id() {
        let app = app();
        app.open("devan").unwrap();
        app.close();
        let once = app.selection();
        app.close();
        assert_eq!(app.selection(), once);

        assert!(!once.visible());
        assert_eq!(once.selected(), Some("devan"));
        assert!(app.current_profile().is_none());
    }

    #[test]
    fn reopen_swaps_without_intermediate_close() {
        let app = app();
        app.open("mira").unwrap();
        app.open("sofia").unwrap();
        assert_eq!(app.current_profile().unwrap().id, "sofia");
        assert!(app.selection().visible());
        assert!(app.is_scroll_locked());
    }

    #[test]
    fn unknown_id_is_rejected_and_state_is_untouched() {
        let app = app();
        let err = app.open("nobody").unwrap_err();
        assert!(matches!(err, FolioError::UnknownProfile(id) if id == "nobody"));
        assert!(app.current_profile().is_none());
        assert!(!app.is_scroll_locked());

        // Also from an open state: the shown profile stays put.
        app.open("mira").unwrap();
        assert!(app.open("nobody").is_err());
        assert_eq!(app.current_profile().unwrap().id, "mira");
        assert!(app.is_scroll_locked());
    }

    #[test]
    fn lock_follows_the_most_recent_transition() {
        let app = app();
        app.open("mira").unwrap();
        app.open("devan").unwrap();
        assert!(app.is_scroll_locked());
        app.close();
        app.close();
        assert!(!app.is_scroll_locked());
        app.open("sofia").unwrap();
        assert!(app.is_scroll_locked());
    }

    #[test]
    fn dropping_the_shell_releases_the_lock() {
        let app = app();
        let lock = app.scroll_lock().clone();
        app.open("mira").unwrap();
        assert!(lock.is_locked());
        drop(app);
        assert!(!lock.is_locked());
    }

    #[test]
    fn overlay_swap_cycles_the_roster_both_ways() {
        let app = app();
        app.open("mira").unwrap();
        app.open_next().unwrap();
        assert_eq!(app.current_profile().unwrap().id, "devan");
        app.open_previous().unwrap();
        app.open_previous().unwrap();
        assert_eq!(app.current_profile().unwrap().id, "sofia");
    }

    #[test]
    fn swap_while_closed_is_a_no_op() {
        let app = app();
        app.open_next().unwrap();
        assert!(app.current_profile().is_none());
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn directory_cursor_wraps_both_ways() {
        let app = app();
        app.directory_select_previous();
        assert_eq!(app.directory_nav().read().unwrap().selected(), Some(2));
        app.directory_select_next();
        assert_eq!(app.directory_nav().read().unwrap().selected(), Some(0));
    }

    #[test]
    fn open_under_cursor_uses_roster_order() {
        let app = app();
        app.directory_select_next();
        app.open_under_cursor().unwrap();
        assert_eq!(app.current_profile().unwrap().id, "devan");
    }

    #[test]
    fn reopening_resets_overlay_scroll() {
        let app = app();
        app.open("mira").unwrap();
        app.set_modal_scroll_max(10);
        app.modal_scroll_down();
        app.modal_scroll_down();
        assert_eq!(app.modal_scroll(), 2);
        app.open("devan").unwrap();
        assert_eq!(app.modal_scroll(), 0);
    }

    #[test]
    fn overlay_scroll_clamps_to_the_rendered_ceiling() {
        let app = app();
        app.open("mira").unwrap();
        app.set_modal_scroll_max(2);
        for _ in 0..5 {
            app.modal_scroll_down();
        }
        assert_eq!(app.modal_scroll(), 2);

        // Terminal shrank: a lower ceiling pulls the offset back.
        app.set_modal_scroll_max(1);
        assert_eq!(app.modal_scroll(), 1);

        app.modal_scroll_up();
        app.modal_scroll_up();
        assert_eq!(app.modal_scroll(), 0);
    }

    #[test]
    fn page_navigation_stacks_and_goes_back() {
        let app = app();
        assert_eq!(app.get_current_page(), Page::Directory);
        app.navigate_to(Page::Help);
        assert_eq!(app.get_current_page(), Page::Help);
        assert!(app.has_previous_page());
        app.go_back();
        assert_eq!(app.get_current_page(), Page::Directory);
    }
}
