use eframe::egui;

use crate::app::{WayfarerApp, FIELD_GAP, SCREEN_PADDING};

const PREVIEW_SIZE: f32 = 160.0;

enum AddAction {
    None,
    Submit,
    TakePhoto,
    Cancel,
}

impl WayfarerApp {
    pub(crate) fn draw_add_destination(&mut self, ctx: &egui::Context) {
        let mut action = AddAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(SCREEN_PADDING))
            .show(ctx, |ui| {
                ui.label("Destination name");
                ui.add(
                    egui::TextEdit::singleline(&mut self.add_form.name)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(FIELD_GAP);

                ui.label("Destination description");
                ui.add(
                    egui::TextEdit::multiline(&mut self.add_form.description)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(FIELD_GAP);

                if ui.button("Add destination").clicked() {
                    action = AddAction::Submit;
                }
                ui.add_space(FIELD_GAP);

                use egui_material_icons::icons::*;
                let capturing = self.add_form.is_capturing();
                let photo_label = format!("{ICON_PHOTO_CAMERA} Take a photo");
                if ui
                    .add_enabled(!capturing, egui::Button::new(photo_label))
                    .clicked()
                {
                    action = AddAction::TakePhoto;
                }
                if capturing {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("Developing photo\u{2026}");
                    });
                }
                if let Some(reason) = self.add_form.capture_failure() {
                    ui.colored_label(egui::Color32::RED, format!("Photo failed: {reason}"));
                }
                if let (Some(tex), Some(photo)) = (&self.photo_texture, self.add_form.photo()) {
                    ui.add_space(8.0);
                    ui.add(
                        egui::Image::new((tex.id(), egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE)))
                            .corner_radius(4.0),
                    );
                    ui.weak(&photo.label);
                }
                ui.add_space(FIELD_GAP);

                if ui.button("Cancel").clicked() {
                    action = AddAction::Cancel;
                }
            });

        match action {
            AddAction::Submit => {
                let destination = self.add_form.submit();
                let result = self.navigator.finish_add(destination).map(|_| ());
                self.report(result);
            }
            AddAction::TakePhoto => {
                self.camera.take_photo(&mut self.add_form);
                ctx.request_repaint();
            }
            AddAction::Cancel => {
                let result = self.navigator.cancel_add();
                self.report(result);
            }
            AddAction::None => {}
        }
    }
}
