use super::color32;
use crate::counter::{Appearance, ConfigForm, CounterConfig};
use crate::error::ConfigError;
use crate::indicator::IndicatorKind;
use crate::settings::Settings;
use crate::surface::Rgba;
use eframe::egui;

pub enum ConfigAction {
    None,
    Start(CounterConfig),
    Invalid(ConfigError),
    Quit,
}

/// The configuration window shown before the counter starts.
pub struct ConfigPanel {
    form: ConfigForm,
}

impl ConfigPanel {
    pub fn new(settings: &Settings) -> Self {
        Self {
            form: ConfigForm::from_settings(settings),
        }
    }

    pub fn form(&self) -> &ConfigForm {
        &self.form
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfigAction {
        let mut action = ConfigAction::None;

        egui::TopBottomPanel::bottom("config_buttons").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak("Full Screen Counter");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Quit").clicked() {
                        action = ConfigAction::Quit;
                    }
                    if ui.button("Start").clicked() {
                        action = match self.form.validate() {
                            Ok(config) => ConfigAction::Start(config),
                            Err(err) => ConfigAction::Invalid(err),
                        };
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new("Counter Configuration:").strong());
            egui::Grid::new("counter_values")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Start value:");
                    ui.text_edit_singleline(&mut self.form.start_value);
                    ui.end_row();
                    ui.label("Goal:");
                    ui.text_edit_singleline(&mut self.form.goal_value);
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Counter Appearance:").strong());
            egui::Grid::new("counter_appearance")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Before reaching the goal:");
                    appearance_row(ui, &mut self.form.normal, &self.form.start_value);
                    ui.end_row();

                    ui.label("After reaching the goal:");
                    appearance_row(ui, &mut self.form.reached, &self.form.goal_value);
                    ui.end_row();

                    ui.label("Font scale:");
                    ui.add(egui::Slider::new(&mut self.form.font_scale, 0.2..=1.5));
                    ui.end_row();

                    ui.label("Graphical indicator:");
                    egui::ComboBox::from_id_source("indicator_kind")
                        .selected_text(self.form.indicator.to_string())
                        .show_ui(ui, |ui| {
                            for kind in IndicatorKind::ALL {
                                ui.selectable_value(&mut self.form.indicator, kind, kind.to_string());
                            }
                        });
                    ui.end_row();

                    ui.label("Goal reached text:");
                    ui.text_edit_singleline(&mut self.form.goal_reached_text);
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Usage:").strong());
            ui.label("Space – increment the counter");
            ui.label("Backspace – decrement the counter");
            ui.label("Escape – exit the program");
        });

        action
    }
}

fn appearance_row(ui: &mut egui::Ui, appearance: &mut Appearance, preview: &str) {
    ui.horizontal(|ui| {
        egui::Frame::none()
            .fill(color32(appearance.background))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.add_sized(
                    [60.0, 18.0],
                    egui::Label::new(
                        egui::RichText::new(preview)
                            .strong()
                            .color(color32(appearance.text_color())),
                    ),
                );
            });
        edit_color(ui, "Text", &mut appearance.foreground);
        edit_color(ui, "Background", &mut appearance.background);
        ui.add(egui::Slider::new(&mut appearance.alpha, 0..=255).text("Opacity"));
    });
}

fn edit_color(ui: &mut egui::Ui, label: &str, color: &mut Rgba) -> bool {
    ui.label(label);
    let mut rgb = color.to_rgb_array();
    let changed = ui.color_edit_button_srgb(&mut rgb).changed();
    if changed {
        *color = Rgba::rgb(rgb[0], rgb[1], rgb[2]);
    }
    changed
}
