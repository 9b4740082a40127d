//! quadra: window-layout resolution for a macOS snapping utility
//!
//! Given a positioning action, the display arrangement, the window's current
//! rectangle, and the record of the previous action applied to that window,
//! the engine computes the exact target rectangle. Moving the live window,
//! persisting settings, and capturing hotkeys are the caller's business.

pub mod common;
pub mod layout_engine;
pub mod sys;
