use eframe::egui;
use jokebox::gui::JokeboxApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("Jokebox", options, Box::new(|cc| Ok(Box::new(JokeboxApp::new(cc)))))
}
