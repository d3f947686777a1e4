//! niri-setup library exports for testing

pub mod core;
pub mod runner;
pub mod setup;
pub mod tui;

#[cfg(test)]
pub mod test_support;
