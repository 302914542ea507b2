//! Bagh-Chal GUI
//!
//! Play Tigers and Goats against the AI or another player.

use baghchal::ui::BaghChalApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Bagh-Chal"),
        ..Default::default()
    };

    eframe::run_native(
        "Bagh-Chal",
        options,
        Box::new(|cc| Ok(Box::new(BaghChalApp::new(cc)))),
    )
}
