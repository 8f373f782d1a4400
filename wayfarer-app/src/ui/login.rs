use eframe::egui;

use wayfarer_core::LoginOutcome;

use crate::app::{WayfarerApp, FIELD_GAP, SCREEN_PADDING};

const FORM_MAX_WIDTH: f32 = 360.0;
/// Approximate height of the form, used to centre it vertically.
const FORM_HEIGHT: f32 = 220.0;

impl WayfarerApp {
    pub(crate) fn draw_login(&mut self, ctx: &egui::Context) {
        let mut submitted = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(SCREEN_PADDING))
            .show(ctx, |ui| {
                ui.add_space(((ui.available_height() - FORM_HEIGHT) / 2.0).max(0.0));

                ui.vertical_centered(|ui| {
                    ui.set_max_width(FORM_MAX_WIDTH);

                    ui.label("Username");
                    let user = ui.add(
                        egui::TextEdit::singleline(&mut self.login.username)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(FIELD_GAP);

                    ui.label("Password");
                    let pass = ui.add(
                        egui::TextEdit::singleline(&mut self.login.password)
                            .password(true)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(FIELD_GAP);

                    if let Some(message) = self.login.error() {
                        ui.colored_label(egui::Color32::RED, message);
                        ui.add_space(FIELD_GAP);
                    }

                    let enter = (user.lost_focus() || pass.lost_focus())
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Log in").clicked() || enter {
                        submitted = true;
                    }
                });
            });

        if submitted && self.login.submit() == LoginOutcome::Authenticated {
            let result = self.navigator.authenticate();
            self.report(result);
        }
    }
}
