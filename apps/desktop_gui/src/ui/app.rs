use std::{path::PathBuf, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::UploadStatus,
    messages::{Locale, MessageKey},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::submit_selected_file;
use crate::controller::reducer::ControllerState;
use crate::ui::widgets::{
    progress_row, selected_file_card, status_banner, BannerSeverity, ACCENT_BLUE, BODY_TEXT,
    MUTED_TEXT, SUBMIT_GREEN,
};

const CARD_MAX_WIDTH: f32 = 440.0;
const CREDIT_NAME: &str = "Procesflow";
const CREDIT_URL: &str = "https://procesflow.pl/";
/// Upper bound on backend events applied per frame.
const MAX_EVENTS_PER_FRAME: usize = 256;

pub struct UploaderApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    locale: Locale,
    state: ControllerState,
}

impl UploaderApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        locale: Locale,
        max_file_size: u64,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            locale,
            state: ControllerState::new(max_file_size),
        }
    }

    fn text(&self, key: MessageKey) -> &'static str {
        self.locale.text(key)
    }

    fn process_ui_events(&mut self) {
        for event in self.ui_rx.try_iter().take(MAX_EVENTS_PER_FRAME) {
            self.state.apply(event);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Option<PathBuf> = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .first()
                .and_then(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            tracing::debug!(path = %path.display(), "file dropped onto window");
            self.state.pick_path(Some(&path));
        }
    }

    fn open_file_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file();
        self.state.pick_path(picked.as_deref());
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.text(MessageKey::Title))
                    .size(22.0)
                    .strong()
                    .color(BODY_TEXT),
            );
            ui.add_space(8.0);
            for key in [MessageKey::StepChoose, MessageKey::StepSubmit] {
                ui.label(egui::RichText::new(self.text(key)).color(MUTED_TEXT));
            }
        });
    }

    fn show_pick_area(&mut self, ui: &mut egui::Ui, files_hovering: bool) {
        let can_pick = self.state.form.can_pick();
        let stroke_color = if files_hovering && can_pick {
            ACCENT_BLUE
        } else {
            egui::Color32::from_rgb(209, 213, 219)
        };
        let prompt = egui::RichText::new(format!(
            "⬆\n{}\n{}",
            self.text(MessageKey::PickPrompt),
            self.text(MessageKey::DropHint)
        ))
        .color(BODY_TEXT);

        let button = egui::Button::new(prompt)
            .fill(egui::Color32::WHITE)
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .corner_radius(12.0)
            .min_size(egui::vec2(ui.available_width(), 120.0));
        if ui.add_enabled(can_pick, button).clicked() {
            self.open_file_dialog();
        }

        if let Some(file) = self.state.form.selected() {
            ui.add_space(12.0);
            selected_file_card(ui, file);
        }
    }

    fn show_progress(&self, ui: &mut egui::Ui) {
        let form = &self.state.form;
        if form.is_in_flight() && form.progress() > 0 {
            progress_row(ui, self.text(MessageKey::Uploading), form.progress());
            ui.add_space(12.0);
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let severity = match self.state.form.status() {
            UploadStatus::None => return,
            UploadStatus::Success(_) => BannerSeverity::Success,
            UploadStatus::Error(_) => BannerSeverity::Error,
        };
        if let Some(message) = self.locale.status_text(self.state.form.status()) {
            status_banner(ui, severity, &message);
            ui.add_space(12.0);
        }
    }

    fn show_submit_button(&mut self, ui: &mut egui::Ui) {
        let in_flight = self.state.form.is_in_flight();
        let label = if in_flight {
            self.text(MessageKey::Starting).to_string()
        } else {
            format!("▶ {}", self.text(MessageKey::StartScenario))
        };
        let button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
            .fill(SUBMIT_GREEN)
            .corner_radius(8.0)
            .min_size(egui::vec2(ui.available_width(), 44.0));
        let response = ui.add_enabled(self.state.form.can_submit(), button);

        if in_flight {
            let spinner_center = response.rect.left_center() + egui::vec2(28.0, 0.0);
            ui.put(
                egui::Rect::from_center_size(spinner_center, egui::vec2(16.0, 16.0)),
                egui::Spinner::new().size(16.0).color(egui::Color32::WHITE),
            );
        } else if response.clicked() {
            submit_selected_file(&mut self.state.form, &self.cmd_tx);
        }
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.text(MessageKey::CreatedBy))
                        .small()
                        .color(MUTED_TEXT),
                );
                ui.hyperlink_to(egui::RichText::new(CREDIT_NAME).small(), CREDIT_URL);
            });
            if let Some(reason) = &self.state.backend_failure {
                ui.label(
                    egui::RichText::new(reason)
                        .small()
                        .color(egui::Color32::from_rgb(185, 28, 28)),
                );
            }
        });
    }
}

impl eframe::App for UploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if self.state.form.can_pick() {
            self.handle_dropped_files(ctx);
        }
        let files_hovering = ctx.input(|input| !input.raw.hovered_files.is_empty());

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(241, 245, 249)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CARD_MAX_WIDTH);
                        ui.add_space(24.0);
                        egui::Frame::new()
                            .fill(egui::Color32::WHITE)
                            .corner_radius(16.0)
                            .inner_margin(egui::Margin::same(28))
                            .show(ui, |ui| {
                                self.show_header(ui);
                                ui.add_space(24.0);
                                self.show_pick_area(ui, files_hovering);
                                ui.add_space(20.0);
                                self.show_progress(ui);
                                self.show_status(ui);
                                self.show_submit_button(ui);
                            });
                        ui.add_space(12.0);
                        self.show_footer(ui);
                    });
                });
            });

        if self.state.form.is_in_flight() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
