//! # Core Application Logic
//!
//! This module contains the setup assistant's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (session state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Run(Job)
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ◀── Action::Completed ── │   setup    │
//!     │  Adapter   │                          │   jobs     │
//!     │ (ratatui)  │                          │ (blocking) │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`menu`]: The fixed menu catalog and the jobs it dispatches
//! - [`outcome`]: What a finished job reports back
//! - [`config`]: Layered, immutable configuration
//! - [`bootstrap`]: Runtime directory checks done before the UI starts

pub mod action;
pub mod bootstrap;
pub mod config;
pub mod menu;
pub mod outcome;
pub mod state;
