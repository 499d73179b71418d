//! Input devices and per-frame input resolution
//!
//! Devices are modelled as plain snapshots handed in by the host each
//! frame; nothing here talks to the browser.

pub mod gamepad;
pub mod keyboard;
pub mod resolver;

pub use gamepad::*;
pub use keyboard::*;
pub use resolver::*;

/// Errors raised while configuring input
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown gamepad button name: {0}")]
    UnknownButton(String),
}
