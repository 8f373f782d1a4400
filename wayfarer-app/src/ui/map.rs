//! Self-drawn map: a Web-Mercator graticule with marker pins.
//!
//! There are no tiles; the widget only conveys where the markers sit
//! relative to the lines of latitude and longitude around them.

use eframe::egui;

use wayfarer_core::{LatLng, MapView};

const SEA: egui::Color32 = egui::Color32::from_rgb(170, 205, 230);
const GRID: egui::Color32 = egui::Color32::from_rgb(120, 160, 190);
const PIN: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
const PIN_RADIUS: f32 = 7.0;
const ZOOM_BUTTON: f32 = 28.0;
/// Upper bound on grid lines per axis, in case of a degenerate step.
const MAX_GRID_LINES: usize = 64;

/// Draw `map` filling the available width at `height` px.
///
/// Dragging pans, ctrl+scroll / pinch or the +/- buttons zoom.
pub(crate) fn map_widget(ui: &mut egui::Ui, map: &mut MapView, height: f32) -> egui::Response {
    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;
    let (w, h) = (rect.width() as f64, rect.height() as f64);

    if response.dragged() {
        let delta = response.drag_delta();
        map.pan_pixels(delta.x as f64, delta.y as f64);
    }
    if response.hovered() {
        let zoom_delta = ui.input(|i| i.zoom_delta());
        if zoom_delta != 1.0 {
            map.zoom_by(zoom_delta.log2());
        }
    }
    if response.double_clicked() {
        map.zoom_by(1.0);
    }

    let to_screen = |p: LatLng| {
        let (x, y) = map.project(p, w, h);
        rect.min + egui::vec2(x as f32, y as f32)
    };

    painter.rect_filled(rect, 4.0, SEA);

    // Graticule
    let step = map.graticule_step();
    let north_west = map.unproject(0.0, 0.0, w, h);
    let south_east = map.unproject(w, h, w, h);
    let stroke = egui::Stroke::new(1.0, GRID);
    let font = egui::FontId::proportional(10.0);

    let mut lon = (north_west.longitude / step).floor() * step;
    for _ in 0..MAX_GRID_LINES {
        if lon > south_east.longitude {
            break;
        }
        let x = to_screen(LatLng::new(map.center.latitude, lon)).x;
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        painter.text(
            egui::pos2(x + 2.0, rect.max.y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lon:.3}\u{00b0}"),
            font.clone(),
            GRID,
        );
        lon += step;
    }

    let mut lat = (south_east.latitude / step).floor() * step;
    for _ in 0..MAX_GRID_LINES {
        if lat > north_west.latitude {
            break;
        }
        let y = to_screen(LatLng::new(lat, map.center.longitude)).y;
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        painter.text(
            egui::pos2(rect.min.x + 2.0, y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lat:.3}\u{00b0}"),
            font.clone(),
            GRID,
        );
        lat += step;
    }

    // Markers
    for marker in &map.markers {
        let tip = to_screen(marker.position);
        if !rect.expand(PIN_RADIUS * 3.0).contains(tip) {
            continue;
        }
        let head = tip - egui::vec2(0.0, PIN_RADIUS * 2.2);
        painter.add(egui::Shape::convex_polygon(
            vec![
                tip,
                head + egui::vec2(-PIN_RADIUS * 0.8, PIN_RADIUS * 0.6),
                head + egui::vec2(PIN_RADIUS * 0.8, PIN_RADIUS * 0.6),
            ],
            PIN,
            egui::Stroke::NONE,
        ));
        painter.circle(head, PIN_RADIUS, PIN, egui::Stroke::new(1.5, egui::Color32::WHITE));
        painter.text(
            head - egui::vec2(0.0, PIN_RADIUS + 2.0),
            egui::Align2::CENTER_BOTTOM,
            &marker.title,
            egui::FontId::proportional(13.0),
            egui::Color32::BLACK,
        );
    }

    // Camera readout
    painter.text(
        rect.right_bottom() - egui::vec2(6.0, 4.0),
        egui::Align2::RIGHT_BOTTOM,
        format!(
            "{:.4}, {:.4} \u{00b7} z{:.1}",
            map.center.latitude, map.center.longitude, map.zoom
        ),
        egui::FontId::monospace(11.0),
        egui::Color32::from_gray(40),
    );

    // Zoom buttons
    let button_size = egui::vec2(ZOOM_BUTTON, ZOOM_BUTTON);
    let plus_rect = egui::Rect::from_min_size(
        rect.right_top() + egui::vec2(-ZOOM_BUTTON - 6.0, 6.0),
        button_size,
    );
    let minus_rect = plus_rect.translate(egui::vec2(0.0, ZOOM_BUTTON + 4.0));
    if ui.put(plus_rect, egui::Button::new("+")).clicked() {
        map.zoom_by(1.0);
    }
    if ui.put(minus_rect, egui::Button::new("\u{2212}")).clicked() {
        map.zoom_by(-1.0);
    }

    response
}
