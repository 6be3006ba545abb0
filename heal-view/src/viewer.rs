//! Interactive wound-healing timeline viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the timeline state
//! (progress, playback clock, per-cell scatter fields) and implements
//! [`eframe::App`] to render the wound bed, cell populations, and
//! milestone log through an egui UI.

use eframe::App;
use glam::Vec2;
use heal_core::{
    cell::{CELL_CURVES, CellKind},
    easing::ease_out_cubic,
    field::CellField,
    milestone::{self, MILESTONES},
    phase,
    types::Rgb,
    wound::{self, WoundBed},
};
use rand::rng;

/// Seconds one full timeline sweep takes at the default playback rate.
const DEFAULT_SWEEP_SECS: f64 = 30.0;

/// Semi-axes of the wound bed in world units.
const BED_RADII: Vec2 = Vec2::new(46.0, 30.0);

/// Floor on the scatter-bed scale, so late-stage cells are not piled
/// onto the residual scar dot as the wound closes.
const SCATTER_FLOOR: f32 = 0.25;

/// Seconds a milestone flash stays on screen before fading out.
const FLASH_SECS: f64 = 2.5;

/// Converts a table color into an egui color.
fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

/// A short-lived banner for the most recently fired milestone.
#[derive(Clone, Copy)]
struct Flash {
    label: &'static str,
    born: f64,
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The timeline core: phase/cell/milestone queries driven by `t`.
/// - One [`CellField`] per cell type for stable scatter positions.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions (scrub, playback buttons, pan/zoom).
/// 2. If `playing`, advance `t` from the frame clock.
/// 3. Render the wound bed, scatters, and milestone overlay.
///
/// ### Fields
/// - `t` - Normalized healing progress in `[0, 1]`.
/// - `playing` - Whether the timeline is auto-advancing.
/// - `sweep_secs` - Seconds a full sweep from 0 to 1 takes.
/// - `last_tick` - Time stamp of the last playback tick (egui time).
///
/// - `bed` - The wound region at full extent.
/// - `fields` - Scatter positions, one per cell type in table order.
/// - `rng` - Random number generator used when spawning scatter points.
///
/// - `seen_events` - How many milestones the current `t` has reached.
/// - `flash` - Fading banner for the most recently fired milestone.
///
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
pub struct Viewer {
    t: f32,
    playing: bool,
    sweep_secs: f64,
    last_tick: f64,

    bed: WoundBed,
    fields: Vec<CellField>,
    rng: rand::rngs::ThreadRng,

    seen_events: usize,
    flash: Option<Flash>,

    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a new viewer at the moment of injury.
    ///
    /// Progress starts at zero with playback paused, an empty scatter
    /// field per cell type, and the camera at a moderate zoom with no
    /// pan.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let fields = CellKind::all()
            .iter()
            .map(|&kind| CellField::new(kind))
            .collect();

        Self {
            t: 0.0,
            playing: false,
            sweep_secs: DEFAULT_SWEEP_SECS,
            last_tick: 0.0,
            bed: WoundBed::new(Vec2::new(0.0, 0.0), BED_RADII),
            fields,
            rng: rng(),
            seen_events: 0,
            flash: None,
            zoom: 3.0,
            pan: egui::vec2(0.0, 0.0),
        }
    }

    /// Rewinds the timeline to the moment of injury.
    ///
    /// Keeps the camera and playback rate, but zeroes progress, stops
    /// playback, empties every scatter field, and clears the milestone
    /// log and flash.
    fn reset(&mut self) {
        self.t = 0.0;
        self.playing = false;
        self.last_tick = 0.0;
        self.seen_events = 0;
        self.flash = None;
        for field in &mut self.fields {
            field.points.clear();
        }
        tracing::info!("timeline reset");
    }

    /// Jumps to `t` (clamped to `[0, 1]`) and brings all derived state
    /// with it.
    fn set_progress(&mut self, t: f32, now: f64) {
        self.t = t.clamp(0.0, 1.0);
        self.refresh(now);
    }

    /// Re-derives scatter fields and milestone bookkeeping from the
    /// current progress value.
    ///
    /// Newly reached milestones raise the flash banner; rewinding past
    /// a trigger shrinks the log and drops the flash.
    fn refresh(&mut self, now: f64) {
        self.sync_fields();

        let reached = milestone::reached_by(self.t).count();
        if reached > self.seen_events
            && let Some(latest) = milestone::reached_by(self.t).last()
        {
            self.flash = Some(Flash {
                label: latest.label,
                born: now,
            });
            tracing::debug!(milestone = latest.label, t = self.t, "milestone reached");
        }
        if reached < self.seen_events {
            self.flash = None;
        }
        self.seen_events = reached;
    }

    /// Brings every scatter field in line with its population curve.
    ///
    /// The scatter bed shrinks with wound closure (down to
    /// [`SCATTER_FLOOR`]), so cells stranded outside the closing edge
    /// are culled and respawned further in.
    fn sync_fields(&mut self) {
        let scatter = self.bed.scaled(wound::openness(self.t).max(SCATTER_FLOOR));
        for (i, field) in self.fields.iter_mut().enumerate() {
            let target = CELL_CURVES[i].count_at(self.t) as usize;
            field.sync_to(target, &scatter, &mut self.rng);
        }
    }

    /// Advances playback by the wall-clock delta since the last tick.
    ///
    /// Progress moves at `1 / sweep_secs` per second. Reaching the end
    /// of the timeline clamps `t` to 1 and stops playback.
    fn advance(&mut self, now: f64) {
        if !self.playing {
            return;
        }
        let dt = now - self.last_tick;
        self.last_tick = now;
        if dt <= 0.0 {
            return;
        }

        let next = self.t + (dt / self.sweep_secs) as f32;
        if next >= 1.0 {
            self.playing = false;
            tracing::info!(sweep_secs = self.sweep_secs, "timeline sweep complete");
        }
        self.set_progress(next, now);
    }

    /// Skips forward to the next milestone trigger, or to the end of
    /// the timeline when none remain.
    fn jump_to_next_event(&mut self, now: f64) {
        match MILESTONES.iter().find(|m| m.t > self.t) {
            Some(next) => self.set_progress(next.t, now),
            None => self.set_progress(1.0, now),
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Screen-space outline of an elliptical bed, as a 64-gon.
    fn ellipse_points(&self, bed: &WoundBed, rect: egui::Rect) -> Vec<egui::Pos2> {
        use std::f32::consts::TAU;
        let segments = 64;
        let mut pts = Vec::with_capacity(segments);
        for i in 0..segments {
            let a = (i as f32) / (segments as f32) * TAU;
            let local = Vec2::new(a.cos() * bed.radii.x, a.sin() * bed.radii.y);
            pts.push(self.world_to_screen(bed.center + local, rect));
        }
        pts
    }

    /// Builds the top panel UI (playback controls, scrubber, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                    if self.playing {
                        let now = ctx.input(|i| i.time);
                        self.last_tick = now;
                        // Playing from the end starts the sweep over.
                        if self.t >= 1.0 {
                            self.set_progress(0.0, now);
                        }
                    }
                }

                ui.add(
                    egui::DragValue::new(&mut self.sweep_secs)
                        .prefix("sweep = ")
                        .suffix(" s")
                        .range(5.0..=240.0)
                        .speed(0.5),
                );

                if ui.button("Next event").clicked() {
                    let now = ctx.input(|i| i.time);
                    self.jump_to_next_event(now);
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                let scrub = ui.add(egui::Slider::new(&mut self.t, 0.0..=1.0).text("progress"));
                if scrub.changed() {
                    let now = ctx.input(|i| i.time);
                    self.refresh(now);
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (progress, day label, phase, cells).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {:.3}", self.t));
                ui.separator();
                ui.label(phase::day_label(self.t));
                ui.label(format!("phase: {}", phase::phase_at(self.t).kind.name()));
                ui.separator();
                let cells: usize = self.fields.iter().map(|f| f.points.len()).sum();
                ui.label(format!("cells = {cells}"));
            });
        });
    }

    /// Builds the right-hand panel with the phase card, population
    /// legend, and milestone log.
    fn ui_timeline_panel(&self, ctx: &egui::Context) {
        egui::SidePanel::right("timeline_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                let phase = phase::phase_at(self.t);

                ui.heading("Timeline");

                ui.separator();
                ui.label(
                    egui::RichText::new(phase.kind.name())
                        .color(color32(phase.color))
                        .strong(),
                );
                ui.label(phase.summary);
                ui.label(format!(
                    "Days {} to {}",
                    phase.day_start as u32, phase.day_end as u32
                ));
                ui.label(format!(
                    "Wound {:.0}% open",
                    wound::openness(self.t) * 100.0
                ));

                ui.separator();
                ui.label("Cell populations");
                for (curve, field) in CELL_CURVES.iter().zip(self.fields.iter()) {
                    ui.colored_label(
                        color32(curve.color),
                        format!("● {}: {}", curve.kind.name(), field.points.len()),
                    );
                }

                ui.separator();
                ui.label("Milestones");
                let reached: Vec<_> = milestone::reached_by(self.t).collect();
                if reached.is_empty() {
                    ui.label(egui::RichText::new("None yet.").weak());
                }
                for (i, event) in reached.iter().enumerate() {
                    let text = if i + 1 == reached.len() {
                        egui::RichText::new(event.label).strong()
                    } else {
                        egui::RichText::new(event.label).weak()
                    };
                    ui.label(text).on_hover_text(event.detail);
                }
            });
    }

    /// Builds the central panel where the wound bed and cell scatters
    /// are drawn and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            let now = ctx.input(|i| i.time);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.1, 10.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Intact skin backdrop.
            painter.rect_filled(
                rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_rgb(234, 203, 186),
            );

            // The original wound margin stays visible as a faint outline.
            let margin = egui::Stroke::new(1.0, egui::Color32::from_rgb(198, 159, 142));
            painter.add(egui::Shape::closed_line(
                self.ellipse_points(&self.bed, rect),
                margin,
            ));

            // Open wound, tinted by the active phase and shrinking as it
            // closes.
            let open = self.bed.scaled(wound::openness(self.t));
            let phase = phase::phase_at(self.t);
            painter.add(egui::Shape::convex_polygon(
                self.ellipse_points(&open, rect),
                color32(phase.color),
                egui::Stroke::NONE,
            ));

            // Cell scatters, in arrival order so later waves draw on top.
            for (curve, field) in CELL_CURVES.iter().zip(self.fields.iter()) {
                let color = color32(curve.color);
                let r = (curve.radius * self.zoom).max(1.5);
                for &p in &field.points {
                    painter.circle_filled(self.world_to_screen(p, rect), r, color);
                }
            }

            // Milestone flash, fading out over a couple of seconds.
            if let Some(flash) = self.flash {
                let age = now - flash.born;
                if age >= FLASH_SECS {
                    self.flash = None;
                } else {
                    let alpha = ease_out_cubic((1.0 - age / FLASH_SECS) as f32);
                    let color =
                        egui::Color32::from_rgba_unmultiplied(84, 36, 28, (alpha * 255.0) as u8);
                    painter.text(
                        egui::pos2(rect.center().x, rect.top() + 32.0),
                        egui::Align2::CENTER_CENTER,
                        flash.label,
                        egui::FontId::proportional(20.0),
                        color,
                    );
                }
            }

            // Auto-advance the timeline if requested.
            if self.playing {
                self.advance(now);
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the timeline side panel.
    /// - Draws the central wound view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_timeline_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-5;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={p:?}, back={back:?}"
            );
        }
    }

    #[test]
    fn new_viewer_starts_at_the_injury() {
        let viewer = Viewer::new();
        assert_eq!(viewer.t, 0.0);
        assert!(!viewer.playing);
        assert_eq!(viewer.fields.len(), CellKind::all().len());
        assert!(viewer.fields.iter().all(|f| f.points.is_empty()));
        assert_eq!(viewer.seen_events, 0);
    }

    #[test]
    fn scrubbing_syncs_the_cell_fields() {
        let mut viewer = Viewer::new();
        viewer.set_progress(0.07, 0.0);

        // Neutrophils sit halfway up their ramp here.
        let neutrophils = &viewer.fields[CellKind::Neutrophil as usize];
        assert_eq!(neutrophils.points.len(), 60);

        // Keratinocytes have not arrived yet.
        let keratinocytes = &viewer.fields[CellKind::Keratinocyte as usize];
        assert!(keratinocytes.points.is_empty());
    }

    #[test]
    fn milestones_flash_once_and_clear_on_rewind() {
        let mut viewer = Viewer::new();
        viewer.set_progress(0.05, 1.0);
        assert_eq!(viewer.seen_events, 1);
        let flash = viewer.flash.expect("new milestone should flash");
        assert_eq!(flash.label, "Clot Formation");
        assert_eq!(flash.born, 1.0);

        // Moving forward without a new trigger keeps the flash.
        viewer.set_progress(0.055, 2.0);
        assert!(viewer.flash.is_some());

        // Rewinding past the trigger clears the log and the flash.
        viewer.set_progress(0.01, 3.0);
        assert_eq!(viewer.seen_events, 0);
        assert!(viewer.flash.is_none());
    }

    #[test]
    fn advance_stops_exactly_at_the_end() {
        let mut viewer = Viewer::new();
        viewer.playing = true;
        viewer.sweep_secs = 10.0;
        viewer.last_tick = 0.0;

        viewer.advance(2.5);
        assert!((viewer.t - 0.25).abs() < 1e-4);
        assert!(viewer.playing);

        viewer.advance(60.0);
        assert_eq!(viewer.t, 1.0);
        assert!(!viewer.playing);
        assert_eq!(viewer.seen_events, MILESTONES.len());
    }

    #[test]
    fn jump_to_next_event_walks_the_triggers() {
        let mut viewer = Viewer::new();
        viewer.jump_to_next_event(0.0);
        assert_eq!(viewer.t, MILESTONES[0].t);
        assert_eq!(viewer.seen_events, 1);

        viewer.jump_to_next_event(0.0);
        assert_eq!(viewer.t, MILESTONES[1].t);
        assert_eq!(viewer.seen_events, 2);

        // Past the last trigger it pins to the end of the timeline.
        viewer.set_progress(0.95, 0.0);
        viewer.jump_to_next_event(0.0);
        assert_eq!(viewer.t, 1.0);
    }

    #[test]
    fn reset_returns_to_a_blank_timeline() {
        let mut viewer = Viewer::new();
        viewer.set_progress(0.5, 1.0);
        viewer.playing = true;
        assert!(viewer.fields.iter().any(|f| !f.points.is_empty()));

        viewer.reset();

        assert_eq!(viewer.t, 0.0);
        assert!(!viewer.playing);
        assert_eq!(viewer.seen_events, 0);
        assert!(viewer.flash.is_none());
        assert!(viewer.fields.iter().all(|f| f.points.is_empty()));
    }
}
