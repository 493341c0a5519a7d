use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings::{
    SettingsData,
    SettingsModal,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
        api_online: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Joke Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, api_online);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, api_online: bool) {
        let color = if api_online {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if api_online {
            "Connected to icanhazdadjoke.com"
        } else {
            "Not connected to icanhazdadjoke.com"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("joke API").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
