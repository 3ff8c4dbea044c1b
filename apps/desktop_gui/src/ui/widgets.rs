//! Small widgets shared by the uploader window.

use eframe::egui;
use shared::{domain::FileDescriptor, format::format_file_size};

pub const ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const SUBMIT_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Success,
    Error,
}

impl BannerSeverity {
    fn colors(self) -> (egui::Color32, egui::Color32, egui::Color32) {
        match self {
            Self::Success => (
                egui::Color32::from_rgb(240, 253, 244),
                egui::Color32::from_rgb(134, 239, 172),
                egui::Color32::from_rgb(22, 101, 52),
            ),
            Self::Error => (
                egui::Color32::from_rgb(254, 242, 242),
                egui::Color32::from_rgb(252, 165, 165),
                egui::Color32::from_rgb(153, 27, 27),
            ),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "⚠",
        }
    }
}

pub fn status_banner(ui: &mut egui::Ui, severity: BannerSeverity, message: &str) {
    let (fill, border, text) = severity.colors();
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(severity.icon()).color(text));
                ui.label(egui::RichText::new(message).color(text));
            });
        });
}

pub fn selected_file_card(ui: &mut egui::Ui, file: &FileDescriptor) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(249, 250, 251))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🗋").size(18.0).color(ACCENT_BLUE));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&file.name).strong().color(BODY_TEXT));
                    ui.label(
                        egui::RichText::new(format_file_size(file.size_bytes))
                            .small()
                            .color(MUTED_TEXT),
                    );
                });
            });
        });
}

pub fn progress_row(ui: &mut egui::Ui, label: &str, percent: u8) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(MUTED_TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{percent}%"))
                    .strong()
                    .color(SUBMIT_GREEN),
            );
        });
    });
    ui.add(
        egui::ProgressBar::new(f32::from(percent) / 100.0)
            .desired_height(8.0)
            .fill(SUBMIT_GREEN),
    );
}
