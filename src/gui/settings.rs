use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_JOKES_PER_BATCH: usize = 5;

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub jokes_per_batch: usize,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { jokes_per_batch: DEFAULT_JOKES_PER_BATCH, dark_mode: true }
    }
}

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    /// Returns the new settings when the user hits Save. The batch size only
    /// applies to the next fetch; the current batch is left alone.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(300.0);

            ui.heading("Joke Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Jokes per batch:");
                ui.add(egui::Slider::new(&mut self.draft.jokes_per_batch, 1..=20));
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
