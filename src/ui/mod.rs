//! UI panel rendering subsystem
//!
//! - Header panel (style selector, clear/dark toggles, background image)
//! - Preview panel (palette swatches and background state)
//! - Status bar (stored form of the selection)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod preview_panel;
pub mod status_bar;
pub mod panel_manager;
