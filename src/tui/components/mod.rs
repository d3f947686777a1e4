//! # TUI Components
//!
//! Stateless, props-based pieces the screens in `ui.rs` are built from.
//! Each file holds one component, its rendering, and its tests.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Screen heading)
//! ├── menu_list.rs    (Action menu with cursor)
//! ├── log_panel.rs    (Log buffer, pinned to the newest line)
//! ├── busy.rs         (Spinner + "Please wait...")
//! └── status_bar.rs   (Status message + key help)
//! ```
//!
//! Components receive their data as fields, never by reaching into
//! global state:
//!
//! ```rust,ignore
//! MenuList::new(&labels, app.cursor, theme).render(frame, area);
//! ```

pub mod busy;
pub mod log_panel;
pub mod menu_list;
pub mod status_bar;
pub mod title_bar;

pub use busy::BusyIndicator;
pub use log_panel::LogPanel;
pub use menu_list::MenuList;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
