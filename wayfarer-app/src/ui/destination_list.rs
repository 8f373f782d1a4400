use std::sync::Arc;

use eframe::egui;
use tracing::warn;

use wayfarer_core::browse::{DESCRIPTION_LINES, ROW_LINE_WIDTH};
use wayfarer_core::{DestinationRow, ImageAsset};

use crate::app::{WayfarerApp, ACCENT, SCREEN_PADDING};
use crate::assets::AssetTextures;
use crate::ui::destination_detail::draw_destination_detail;

const THUMBNAIL_SIZE: f32 = 64.0;
const ROW_PADDING: f32 = 16.0;
const FAB_MARGIN: f32 = 16.0;

enum ListAction {
    None,
    Select(usize),
    CloseDetail,
    OpenAdd,
}

impl WayfarerApp {
    pub(crate) fn draw_destination_list(&mut self, ctx: &egui::Context) {
        let rows = DestinationRow::rows(self.navigator.destinations(), ROW_LINE_WIDTH);
        let mut action = ListAction::None;

        egui::TopBottomPanel::top("list_header").show(ctx, |ui| {
            ui.add_space(SCREEN_PADDING / 2.0);
            ui.label(
                egui::RichText::new("Natural Destinations")
                    .size(24.0)
                    .strong(),
            );
            ui.add_space(SCREEN_PADDING / 2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in &rows {
                        let selected = self.browse.selected() == Some(row.index);
                        if draw_row(ui, ctx, &mut self.textures, row, selected).clicked() {
                            action = ListAction::Select(row.index);
                        }
                    }

                    if let Some((_, detail)) = self.detail.as_mut() {
                        ui.separator();
                        if draw_destination_detail(ui, detail) {
                            action = ListAction::CloseDetail;
                        }
                    }
                    // Room so the floating button never covers the last row.
                    ui.add_space(THUMBNAIL_SIZE + FAB_MARGIN);
                });
        });

        egui::Area::new(egui::Id::new("add_destination_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-FAB_MARGIN, -FAB_MARGIN])
            .show(ctx, |ui| {
                use egui_material_icons::icons::*;
                let label = egui::RichText::new(format!("{ICON_ADD} Add a new destination"))
                    .size(16.0)
                    .color(egui::Color32::BLACK);
                let fab = egui::Button::new(label)
                    .fill(ACCENT)
                    .corner_radius(16.0)
                    .min_size(egui::vec2(0.0, 48.0));
                if ui.add(fab).clicked() {
                    action = ListAction::OpenAdd;
                }
            });

        match action {
            ListAction::Select(index) => self.select_destination(index),
            ListAction::CloseDetail => {
                self.browse.clear();
                self.detail = None;
            }
            ListAction::OpenAdd => {
                let result = self.navigator.open_add();
                self.report(result);
            }
            ListAction::None => {}
        }
    }

    pub(crate) fn select_destination(&mut self, index: usize) {
        let len = self.navigator.destinations().len();
        if let Err(e) = self.browse.select(index, len) {
            warn!("Ignored: {e}");
            return;
        }
        if self.detail.as_ref().map(|(i, _)| *i) == Some(index) {
            return;
        }
        self.detail = self
            .browse
            .detail(self.navigator.destinations(), self.preferences.map_zoom)
            .map(|detail| (index, detail));
    }
}

fn draw_row(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    textures: &mut AssetTextures,
    row: &DestinationRow,
    selected: bool,
) -> egui::Response {
    let fill = if selected {
        ui.visuals().selection.bg_fill.gamma_multiply(0.35)
    } else {
        egui::Color32::TRANSPARENT
    };
    let response = egui::Frame::NONE
        .fill(fill)
        .inner_margin(ROW_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                draw_thumbnail(ui, ctx, textures, row.image);
                ui.add_space(ROW_PADDING);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&row.name).strong());
                    let galley = summary_galley(ui, &row.summary, ui.available_width());
                    ui.label(galley);
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.on_hover_text(&row.name)
}

/// Lay out a row description capped at [`DESCRIPTION_LINES`] rows of
/// `width` px, ending in an ellipsis when cut.
fn summary_galley(ui: &egui::Ui, text: &str, width: f32) -> Arc<egui::text::Galley> {
    let format = egui::text::TextFormat::simple(
        egui::TextStyle::Body.resolve(ui.style()),
        ui.visuals().text_color(),
    );
    let mut job = egui::text::LayoutJob::single_section(text.to_owned(), format);
    job.wrap = egui::text::TextWrapping {
        max_width: width,
        max_rows: DESCRIPTION_LINES,
        overflow_character: Some('\u{2026}'),
        ..Default::default()
    };
    ui.painter().layout_job(job)
}

fn draw_thumbnail(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    textures: &mut AssetTextures,
    asset: ImageAsset,
) {
    let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    match textures.get(ctx, asset) {
        Some(tex) => {
            ui.add(egui::Image::new((tex.id(), size)).corner_radius(4.0));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 4.0, egui::Color32::from_gray(60));
        }
    }
}
