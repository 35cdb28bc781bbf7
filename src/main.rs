//! AmpScope - a power-trace viewer for MCU current measurements
//!
//! AmpScope is a desktop application for inspecting current traces
//! exported from MCU power-measurement tools and computing the energy,
//! average current, and average power consumed in a selected time region.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use ampscope::app::AmpScopeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("AmpScope - Power Trace Viewer")
            .with_app_id("AmpScope")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "AmpScope",
        native_options,
        Box::new(|cc| Ok(Box::new(AmpScopeApp::new(cc)))),
    )
}
