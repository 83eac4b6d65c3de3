use egui::{Align, Layout, Response, Ui};

/// Displays the build version at the right edge of the menu bar.
pub fn version_label(ui: &mut Ui) -> Response {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.weak(format!("v{}", env!("CARGO_PKG_VERSION")))
    })
    .inner
}
