use serde::{Deserialize, Serialize};

/// Zoom level the detail map opens at.
pub const DEFAULT_ZOOM: f32 = 10.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 20.0;

/// Side length of one Web-Mercator tile at zoom 0, in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude beyond which the Mercator projection is cut off.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Grid spacings (degrees) the graticule snaps to, coarsest first.
const GRATICULE_STEPS: [f64; 16] = [
    90.0, 45.0, 30.0, 15.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.25, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002,
];

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Web-Mercator world pixel coordinates at `zoom`.
    ///
    /// `(0, 0)` is the north-west corner of the world; y grows southwards.
    pub fn to_world(self, zoom: f32) -> (f64, f64) {
        let size = world_size(zoom);
        let lat = self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (self.longitude + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
        (x, y)
    }

    /// Inverse of [`LatLng::to_world`].
    pub fn from_world(x: f64, y: f64, zoom: f32) -> Self {
        let size = world_size(zoom);
        let longitude = x / size * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
        let latitude = n.sinh().atan().to_degrees();
        Self {
            latitude,
            longitude,
        }
    }
}

fn world_size(zoom: f32) -> f64 {
    TILE_SIZE * 2f64.powf(zoom as f64)
}

/// A pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
}

/// What the map widget should show: camera position plus markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f32,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// A view centred on `position` with a single marker there.
    pub fn pinned(position: LatLng, title: impl Into<String>, zoom: f32) -> Self {
        Self {
            center: position,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            markers: vec![Marker {
                position,
                title: title.into(),
            }],
        }
    }

    /// Screen position of `point` inside a `width`×`height` viewport.
    pub fn project(&self, point: LatLng, width: f64, height: f64) -> (f64, f64) {
        let (cx, cy) = self.center.to_world(self.zoom);
        let (px, py) = point.to_world(self.zoom);
        (px - cx + width / 2.0, py - cy + height / 2.0)
    }

    /// Geographic position under the screen pixel `(sx, sy)`.
    pub fn unproject(&self, sx: f64, sy: f64, width: f64, height: f64) -> LatLng {
        let (cx, cy) = self.center.to_world(self.zoom);
        LatLng::from_world(cx + sx - width / 2.0, cy + sy - height / 2.0, self.zoom)
    }

    /// Shift the camera by a screen-space drag of `(dx, dy)` pixels.
    pub fn pan_pixels(&mut self, dx: f64, dy: f64) {
        let (cx, cy) = self.center.to_world(self.zoom);
        let size = world_size(self.zoom);
        let x = (cx - dx).rem_euclid(size);
        let y = (cy - dy).clamp(0.0, size);
        self.center = LatLng::from_world(x, y, self.zoom);
    }

    /// Change zoom by `delta` levels, keeping the centre fixed.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Graticule spacing in degrees giving roughly 128 px between lines.
    pub fn graticule_step(&self) -> f64 {
        let degrees_per_128px = 180.0 / 2f64.powf(self.zoom as f64);
        GRATICULE_STEPS
            .iter()
            .copied()
            .find(|&step| step <= degrees_per_128px)
            .unwrap_or(GRATICULE_STEPS[GRATICULE_STEPS.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn origin_maps_to_world_centre() {
        let (x, y) = LatLng::new(0.0, 0.0).to_world(0.0);
        assert!((x - 128.0).abs() < EPSILON);
        assert!((y - 128.0).abs() < EPSILON);
    }

    #[test]
    fn world_round_trip() {
        let p = LatLng::new(48.8566, 2.3522);
        let (x, y) = p.to_world(10.0);
        let back = LatLng::from_world(x, y, 10.0);
        assert!((back.latitude - p.latitude).abs() < 1e-9);
        assert!((back.longitude - p.longitude).abs() < 1e-9);
    }

    #[test]
    fn centre_projects_to_viewport_middle() {
        let view = MapView::pinned(LatLng::new(34.0522, -118.2437), "LA", DEFAULT_ZOOM);
        let (sx, sy) = view.project(view.center, 400.0, 300.0);
        assert!((sx - 200.0).abs() < EPSILON);
        assert!((sy - 150.0).abs() < EPSILON);
    }

    #[test]
    fn north_is_up() {
        let view = MapView::pinned(LatLng::new(0.0, 0.0), "", 4.0);
        let (_, north_y) = view.project(LatLng::new(10.0, 0.0), 100.0, 100.0);
        let (_, south_y) = view.project(LatLng::new(-10.0, 0.0), 100.0, 100.0);
        assert!(north_y < south_y);
    }

    #[test]
    fn pinned_view_has_single_marker_at_centre() {
        let p = LatLng::new(51.5074, -0.1278);
        let view = MapView::pinned(p, "London", DEFAULT_ZOOM);
        assert_eq!(view.center, p);
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].position, p);
        assert_eq!(view.markers[0].title, "London");
    }

    #[test]
    fn pan_moves_centre_opposite_to_drag() {
        let mut view = MapView::pinned(LatLng::new(0.0, 0.0), "", 5.0);
        view.pan_pixels(50.0, 0.0);
        assert!(view.center.longitude < 0.0);
        view.pan_pixels(0.0, 50.0);
        assert!(view.center.latitude > 0.0);
    }

    #[test]
    fn unproject_inverts_project() {
        let view = MapView::pinned(LatLng::new(25.7617, -80.1918), "", 8.0);
        let p = LatLng::new(26.0, -80.0);
        let (sx, sy) = view.project(p, 640.0, 480.0);
        let back = view.unproject(sx, sy, 640.0, 480.0);
        assert!((back.latitude - p.latitude).abs() < 1e-9);
        assert!((back.longitude - p.longitude).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut view = MapView::pinned(LatLng::new(0.0, 0.0), "", DEFAULT_ZOOM);
        view.zoom_by(100.0);
        assert_eq!(view.zoom, MAX_ZOOM);
        view.zoom_by(-100.0);
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn graticule_gets_finer_when_zooming_in() {
        let coarse = MapView::pinned(LatLng::new(0.0, 0.0), "", 2.0).graticule_step();
        let fine = MapView::pinned(LatLng::new(0.0, 0.0), "", DEFAULT_ZOOM).graticule_step();
        assert!(fine < coarse);
        assert_eq!(fine, 0.1);
    }
}
