// ui.rs - Controls and pixel painting for the screen viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};
use screen::SAMPLES;
use crate::{ScreenViewer, ScreenViewerInterface};

impl eframe::App for ScreenViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Screen Viewer");

            // Controls
            ui.horizontal(|ui| {
                let finished = self.playback.is_finished();
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.add_enabled(!finished, egui::Button::new(button_text)).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!finished && !self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.advance();
                }

                if ui.button("⏮ Reset").clicked() {
                    self.restart();
                }

                ui.separator();

                // Sample dropdown
                ui.label("Sample:");
                egui::ComboBox::from_id_source("sample_selector")
                    .selected_text(SAMPLES[self.selected_sample].name)
                    .show_ui(ui, |ui| {
                        for (i, sample) in SAMPLES.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_sample, i, sample.name);
                        }
                    });

                if ui.button("Load Sample").clicked() {
                    self.load_selected_sample();
                }
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" cmd/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Lit:");
                ui.color_edit_button_srgba(&mut self.lit_color);
                ui.label("Unlit:");
                ui.color_edit_button_srgba(&mut self.unlit_color);
            });

            ui.separator();

            let status = self.status();
            if self.playback.error().is_some() {
                ui.colored_label(Color32::from_rgb(220, 80, 80), status);
            } else {
                ui.label(status);
            }

            ui.separator();

            // Draw the pixels
            let screen = self.playback.screen();
            let box_size = 15.0;
            let spacing = 0.5;
            let pitch = box_size + spacing;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                pitch * screen.width() as f32 - spacing,
                pitch * screen.height() as f32 - spacing,
            );

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for row in 0..screen.height() {
                for col in 0..screen.width() {
                    let rect = Rect::from_min_size(
                        egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + row as f32 * pitch),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if screen.is_lit(row, col) {
                        self.lit_color
                    } else {
                        self.unlit_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            ui.separator();

            let lit = screen.count_lit();
            let unlit = screen.count_unlit();
            ui.horizontal(|ui| {
                ui.label(format!("Lit pixels: {lit}"));
                ui.label(format!("Unlit pixels: {unlit}"));
                ui.label(format!("Lit: {:.1}%", lit as f32 * 100.0 / (lit + unlit).max(1) as f32));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
