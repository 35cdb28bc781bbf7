//! Main application state and event handling.
//!
//! All mutable state lives in [`AmpScopeApp`]; there are no ambient
//! globals. UI code reacts to gestures and widget changes by calling the
//! fixed handler set `on_load` / `on_selection_changed` /
//! `on_compute_requested` / `on_voltage_changed`, which keeps the event
//! wiring explicit and testable without a running event loop.

use std::path::{Path, PathBuf};
use std::time::Instant;

use eframe::egui;

use crate::analysis::{analyze_region, RegionError, RegionSummary};
use crate::parsers::{McuXpresso, ParseError, Parseable};
use crate::settings::UserSettings;
use crate::state::{LoadedTrace, Selection, ToastType};

/// Load a trace from `path`, or the startup placeholder when `path` is
/// `None` (no file chosen / dialog cancelled).
///
/// Runs synchronously on the caller's thread; loading blocks the
/// interaction loop by design.
pub fn load_trace(path: Option<&Path>) -> Result<LoadedTrace, ParseError> {
    match path {
        None => Ok(LoadedTrace::placeholder()),
        Some(path) => {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ParseError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            let trace = McuXpresso.parse(&contents)?;
            Ok(LoadedTrace::new(path.to_path_buf(), trace))
        }
    }
}

/// Main application state
pub struct AmpScopeApp {
    /// The currently loaded trace (placeholder until a file is opened)
    pub trace: LoadedTrace,
    /// Current region selection
    pub selection: Selection,
    /// Supply voltage (Ualim) in volts, independent of any measured column
    pub supply_voltage: f64,
    /// Chart line width in pixels (cosmetic)
    pub line_width: f32,
    /// Results of the last compute, cleared on load
    pub region_summary: Option<RegionSummary>,
    /// Last pointer position over the chart, plot coordinates (s, mA)
    pub cursor: Option<(f64, f64)>,
    /// Toast message for user feedback
    pub toast_message: Option<(String, Instant, ToastType)>,
    /// Cached peak-downsampled points for rendering
    pub(crate) downsample_cache: Option<Vec<[f64; 2]>>,
    /// Anchor time of an in-progress selection drag
    pub(crate) drag_anchor: Option<f64>,
    /// Bumped on every load; salts the plot id so the view resets
    pub(crate) load_generation: u64,
    /// Window title needs updating (set on load)
    pub(crate) title_dirty: bool,
    /// Persisted user preferences
    pub(crate) settings: UserSettings,
}

impl Default for AmpScopeApp {
    fn default() -> Self {
        let settings = UserSettings::default();
        Self {
            trace: LoadedTrace::placeholder(),
            selection: Selection::seed(),
            supply_voltage: settings.supply_voltage,
            line_width: settings.line_width,
            region_summary: None,
            cursor: None,
            toast_message: None,
            downsample_cache: None,
            drag_anchor: None,
            load_generation: 0,
            title_dirty: true,
            settings,
        }
    }
}

impl AmpScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = UserSettings::load();
        Self {
            supply_voltage: settings.supply_voltage,
            line_width: settings.line_width.clamp(1.0, 10.0),
            settings,
            ..Default::default()
        }
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast_message = Some((message.into(), Instant::now(), toast_type));
    }

    /// Load a new trace, replacing the current one wholesale.
    ///
    /// `None` (a cancelled file dialog) resets to the placeholder trace.
    /// On a parse failure the previous trace, selection, and results are
    /// left untouched.
    pub fn on_load(&mut self, path: Option<PathBuf>) {
        match load_trace(path.as_deref()) {
            Ok(loaded) => {
                tracing::info!(samples = loaded.trace.len(), name = %loaded.name, "trace loaded");
                if let Some(dir) = path.as_deref().and_then(Path::parent) {
                    self.settings.last_open_dir = Some(dir.to_path_buf());
                }
                if path.is_some() {
                    self.show_toast(
                        format!("Loaded {} samples from {}", loaded.trace.len(), loaded.name),
                        ToastType::Success,
                    );
                }
                self.trace = loaded;
                self.selection = Selection::seed();
                self.region_summary = None;
                self.downsample_cache = None;
                self.cursor = None;
                self.drag_anchor = None;
                self.load_generation += 1;
                self.title_dirty = true;
            }
            Err(err) => {
                tracing::warn!(%err, "trace load failed");
                self.show_toast(format!("Failed to load trace: {err}"), ToastType::Error);
            }
        }
    }

    /// Record a new selection from a chart gesture
    pub fn on_selection_changed(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Record a supply-voltage edit (clamped non-negative)
    pub fn on_voltage_changed(&mut self, volts: f64) {
        self.supply_voltage = volts.max(0.0);
        self.settings.supply_voltage = self.supply_voltage;
    }

    /// Compute the region aggregates for the current trace, selection, and
    /// supply voltage.
    ///
    /// A zero-width selection is reported instead of silently dividing by
    /// zero; an empty trace makes the trigger a no-op.
    pub fn on_compute_requested(&mut self) {
        match analyze_region(&self.trace.trace, self.selection, self.supply_voltage) {
            Ok(summary) => {
                tracing::info!(
                    energy_j = summary.energy_j,
                    avg_current_a = summary.avg_current_a,
                    samples = summary.samples,
                    "region computed"
                );
                self.region_summary = Some(summary);
            }
            Err(RegionError::DegenerateSelection { .. }) => {
                self.region_summary = None;
                self.show_toast(
                    "Selection has zero width - drag on the chart to select a region",
                    ToastType::Warning,
                );
            }
            Err(RegionError::EmptyTrace) => {
                self.region_summary = None;
            }
        }
    }

    /// Handle file drops onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Option<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .next()
        });

        if let Some(path) = dropped {
            self.on_load(Some(path));
        }
    }
}

impl eframe::App for AmpScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle file drops
        self.handle_dropped_files(ctx);

        // Apply dark theme
        ctx.set_visuals(egui::Visuals::dark());

        // Reflect the loaded file in the window title
        if self.title_dirty {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                "AmpScope - {}",
                self.trace.name
            )));
            self.title_dirty = false;
        }

        // Toast notifications
        self.render_toast(ctx);

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        // Right panel: information + energy groups
        egui::SidePanel::right("region_panel")
            .default_width(240.0)
            .min_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_region_panel(ui);
            });

        // Main content area: the trace chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.settings.supply_voltage = self.supply_voltage;
        self.settings.line_width = self.line_width;
        if let Err(err) = self.settings.save() {
            tracing::warn!("failed to persist settings: {err:#}");
        }
    }
}
