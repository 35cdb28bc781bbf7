//! Chart rendering and selection gestures.
//!
//! The chart draws the loaded trace from a cached peak-downsampled copy,
//! overlays the current selection as a translucent band, and tracks the
//! pointer with a crosshair. Left-drag resizes the selection, a plain
//! left click collapses it to a point; panning is disabled so the drag
//! gesture always belongs to the region.

use eframe::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints, Polygon, VLine};

use crate::app::AmpScopeApp;
use crate::state::{
    Selection, CROSSHAIR_COLOR, MAX_CHART_POINTS, SELECTION_COLOR, TRACE_COLOR,
};

impl AmpScopeApp {
    /// Render the main trace chart
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        // Rebuild the render cache after a load
        if self.downsample_cache.is_none() {
            let trace = &self.trace.trace;
            self.downsample_cache = Some(Self::downsample_peak(
                &trace.times,
                &trace.currents,
                MAX_CHART_POINTS,
            ));
        }

        let points = self.downsample_cache.as_deref().unwrap_or(&[]);
        let selection = self.selection;
        let line_width = self.line_width;

        let trace_color = egui::Color32::from_rgb(TRACE_COLOR[0], TRACE_COLOR[1], TRACE_COLOR[2]);
        let selection_color = egui::Color32::from_rgb(
            SELECTION_COLOR[0],
            SELECTION_COLOR[1],
            SELECTION_COLOR[2],
        );
        let crosshair_color = egui::Color32::from_rgba_unmultiplied(
            CROSSHAIR_COLOR[0],
            CROSSHAIR_COLOR[1],
            CROSSHAIR_COLOR[2],
            160,
        );

        // The plot id is salted with the load generation so a fresh file
        // gets fresh auto-bounds instead of the previous zoom state
        let plot = Plot::new(("trace_chart", self.load_generation))
            .x_axis_label("Time (s)")
            .y_axis_label("Current (mA)")
            .show_grid(true)
            .allow_drag(false)
            .allow_zoom(true)
            .allow_scroll(true);

        let response = plot.show(ui, |plot_ui| {
            // Selection band behind the trace
            let bounds = plot_ui.plot_bounds();
            let (y_min, y_max) = (bounds.min()[1], bounds.max()[1]);
            if !selection.is_degenerate() {
                let band = PlotPoints::from(vec![
                    [selection.lo, y_min],
                    [selection.lo, y_max],
                    [selection.hi, y_max],
                    [selection.hi, y_min],
                ]);
                plot_ui.polygon(
                    Polygon::new("selection_band", band)
                        .fill_color(selection_color.gamma_multiply(0.15))
                        .stroke(egui::Stroke::NONE),
                );
            }
            plot_ui.vline(
                VLine::new("selection_lo", selection.lo)
                    .color(selection_color)
                    .width(1.5),
            );
            plot_ui.vline(
                VLine::new("selection_hi", selection.hi)
                    .color(selection_color)
                    .width(1.5),
            );

            // Trace line
            let plot_points: PlotPoints = points.iter().copied().collect();
            plot_ui.line(
                Line::new("current", plot_points)
                    .color(trace_color)
                    .width(line_width),
            );

            // Crosshair under the pointer
            let pointer = plot_ui.pointer_coordinate();
            if let Some(pos) = pointer {
                plot_ui.vline(VLine::new("crosshair_v", pos.x).color(crosshair_color).width(1.0));
                plot_ui.hline(HLine::new("crosshair_h", pos.y).color(crosshair_color).width(1.0));
            }

            pointer
        });

        // Remember the hover position for the panel readout
        self.cursor = response.inner.map(|pos| (pos.x, pos.y));

        // Selection gestures
        if response
            .response
            .drag_started_by(egui::PointerButton::Primary)
        {
            if let Some(pos) = response.inner {
                self.drag_anchor = Some(pos.x);
            }
        }
        if response.response.dragged_by(egui::PointerButton::Primary) {
            if let (Some(anchor), Some(pos)) = (self.drag_anchor, response.inner) {
                self.on_selection_changed(Selection::new(anchor, pos.x));
            }
        }
        if response
            .response
            .drag_stopped_by(egui::PointerButton::Primary)
        {
            self.drag_anchor = None;
        }
        if response.response.clicked() {
            if let (Some(pos), Some((_, last_time))) =
                (response.inner, self.trace.trace.time_range())
            {
                if pos.x <= last_time {
                    self.on_selection_changed(Selection::collapsed(pos.x));
                }
            }
        }
    }

    /// Downsample data for rendering, preserving local extremes.
    ///
    /// Buckets the series and emits each bucket's minimum and maximum in
    /// time order, plus the endpoints, so narrow current spikes survive at
    /// any zoom level. Rendering only - the analyzer always integrates
    /// the full-resolution slice.
    pub fn downsample_peak(times: &[f64], values: &[f64], target_points: usize) -> Vec<[f64; 2]> {
        let n = times.len();

        if n <= target_points || target_points < 4 {
            // No downsampling needed
            return times
                .iter()
                .zip(values.iter())
                .map(|(t, v)| [*t, *v])
                .collect();
        }

        let buckets = target_points / 2;
        let bucket_size = n as f64 / buckets as f64;
        let mut result = Vec::with_capacity(target_points + 2);

        result.push([times[0], values[0]]);

        for b in 0..buckets {
            let start = (b as f64 * bucket_size) as usize;
            let end = (((b + 1) as f64) * bucket_size) as usize;
            let end = end.min(n);
            if start >= end {
                continue;
            }

            let mut min_i = start;
            let mut max_i = start;
            for i in start..end {
                if values[i] < values[min_i] {
                    min_i = i;
                }
                if values[i] > values[max_i] {
                    max_i = i;
                }
            }

            if min_i == max_i {
                result.push([times[min_i], values[min_i]]);
            } else {
                // Emit both extremes in time order
                let (first, second) = if min_i < max_i {
                    (min_i, max_i)
                } else {
                    (max_i, min_i)
                };
                result.push([times[first], values[first]]);
                result.push([times[second], values[second]]);
            }
        }

        result.push([times[n - 1], values[n - 1]]);

        result
    }
}
