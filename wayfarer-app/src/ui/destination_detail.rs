use eframe::egui;

use wayfarer_core::DestinationDetail;

use crate::app::SCREEN_PADDING;
use crate::ui::map::map_widget;

const MAP_HEIGHT: f32 = 300.0;

/// Inline detail panel under the list. Returns true when "Back" was pressed.
pub(crate) fn draw_destination_detail(
    ui: &mut egui::Ui,
    detail: &mut DestinationDetail,
) -> bool {
    let mut back = false;
    egui::Frame::NONE
        .inner_margin(SCREEN_PADDING)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(detail.name.as_str()).size(18.0));
            ui.add_space(8.0);
            ui.label(detail.description.as_str());
            ui.add_space(SCREEN_PADDING);

            map_widget(ui, &mut detail.map, MAP_HEIGHT);
            ui.add_space(8.0);

            use egui_material_icons::icons::*;
            if ui.button(format!("{ICON_ARROW_BACK} Back")).clicked() {
                back = true;
            }
        });
    back
}
