//! Site header state
//!
//! Tracks the scrolled look, the debounced search box and the "/" shortcut.
//! A search is emitted once typing has been quiet for the debounce period;
//! every keystroke restarts the wait.

use std::time::{Duration, Instant};

use crate::infra::constants::header;
use crate::messages::NavKey;

/// What currently holds keyboard focus when a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Page,
    /// An input, textarea or select.
    FormField,
}

#[derive(Debug, Clone)]
pub struct HeaderState {
    scrolled: bool,
    query: String,
    search_at: Option<Instant>,
    debounce: Duration,
    menu_open: bool,
    mobile_search_open: bool,
    torn_down: bool,
}

impl HeaderState {
    pub fn new(default_search: impl Into<String>) -> Self {
        Self {
            scrolled: false,
            query: default_search.into(),
            search_at: None,
            debounce: Duration::from_millis(header::SEARCH_DEBOUNCE_MS),
            menu_open: false,
            mobile_search_open: false,
            torn_down: false,
        }
    }

    /// Initial measurement. The starting query is emitted after the usual
    /// debounce.
    pub fn mount(&mut self, scroll_y: f32, now: Instant) {
        self.on_scroll(scroll_y);
        self.search_at = Some(now + self.debounce);
    }

    /// Returns true when the scrolled look changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > header::SCROLLED_AFTER_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The search box changed. Any pending emit is replaced.
    pub fn set_query(&mut self, value: impl Into<String>, now: Instant) {
        if self.torn_down {
            return;
        }
        self.query = value.into();
        self.search_at = Some(now + self.debounce);
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_at
    }

    /// Returns the query to search for once the debounce has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        match self.search_at {
            Some(deadline) if now >= deadline => {
                self.search_at = None;
                log::trace!("header search for '{}'", self.query);
                Some(self.query.clone())
            }
            _ => None,
        }
    }

    /// Global key handler. Returns true when the search box should take
    /// focus and the key's default must be suppressed.
    pub fn on_key(&self, key: NavKey, focus: FocusTarget) -> bool {
        key == NavKey::Slash && focus == FocusTarget::Page
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Following a menu link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_mobile_search(&mut self) -> bool {
        self.mobile_search_open = !self.mobile_search_open;
        self.mobile_search_open
    }

    pub fn is_mobile_search_open(&self) -> bool {
        self.mobile_search_open
    }

    pub fn teardown(&mut self) {
        self.search_at = None;
        self.torn_down = true;
    }
}

/// Display form of the site title: leading symbols dropped, whitespace
/// collapsed, upper-cased. Falls back to the default wordmark.
pub fn wordmark(title: &str) -> String {
    let text = title
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();
    if text.is_empty() {
        header::DEFAULT_WORDMARK.to_string()
    } else {
        text
    }
}
