//! # Application State
//!
//! Core session state for the setup assistant. This module contains domain
//! logic only, no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── screen: Screen               // menu / installing / working
//! ├── items: Vec<MenuItem>         // fixed catalog
//! ├── cursor: usize                // highlighted row
//! ├── selected: Option<MenuItem>   // job in flight (or last one)
//! ├── logs: Vec<String>            // rolling log buffer
//! ├── action_message: String       // busy-screen text
//! ├── status_message: String       // status bar text
//! └── error: Option<String>        // last job failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::menu::{MENU, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    /// Busy with the install job.
    Installing,
    /// Busy with any other job.
    Working,
}

pub struct App {
    pub screen: Screen,
    pub items: Vec<MenuItem>,
    pub cursor: usize,
    pub selected: Option<MenuItem>,
    pub logs: Vec<String>,
    pub action_message: String,
    pub status_message: String,
    pub error: Option<String>,
    /// Compositor display name used in labels ("Niri").
    pub name: String,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            screen: Screen::Menu,
            items: MENU.to_vec(),
            cursor: 0,
            selected: None,
            logs: Vec::new(),
            action_message: String::new(),
            status_message: String::from("Select an action"),
            error: None,
            name: name.into(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.screen != Screen::Menu
    }

    pub fn current_item(&self) -> Option<MenuItem> {
        self.items.get(self.cursor).copied()
    }

    pub fn label(&self, item: MenuItem) -> String {
        item.label(&self.name)
    }
}
