//! UI rendering modules for the AmpScope application.
//!
//! - `chart` - trace chart, crosshair, and selection gestures
//! - `region_panel` - information/energy groups and the compute trigger
//! - `menu` - menu bar (File, Help)
//! - `toast` - toast notification system

pub mod chart;
pub mod menu;
pub mod region_panel;
pub mod toast;
