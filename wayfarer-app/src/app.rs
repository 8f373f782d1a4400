use eframe::egui;
use tracing::{info, warn};

use wayfarer_core::{
    seed_destinations, AddDestinationForm, BrowseState, CoreError, DestinationDetail, LoginForm, NavEvent,
    Navigator, Screen,
};

use crate::assets::AssetTextures;
use crate::camera::CaptureBridge;
use crate::preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const SCREEN_PADDING: f32 = 16.0;
pub(crate) const FIELD_GAP: f32 = 16.0;
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(80, 200, 255);

// ---------------------------------------------------------------------------
// Window icon
// ---------------------------------------------------------------------------

pub(crate) fn load_window_icon() -> Option<egui::IconData> {
    let bytes = include_bytes!("../icon.ico");
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Ico).ok()?;
    let rgba = img.to_rgba8();
    const SIZE: u32 = 32;
    let resized = image::imageops::resize(
        &rgba,
        SIZE,
        SIZE,
        image::imageops::FilterType::Lanczos3,
    );
    Some(egui::IconData {
        rgba: resized.as_raw().clone(),
        width: SIZE,
        height: SIZE,
    })
}

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct WayfarerApp {
    // Navigation and session state
    pub(crate) navigator: Navigator,

    // Per-screen presentation state
    pub(crate) login: LoginForm,
    pub(crate) browse: BrowseState,
    pub(crate) add_form: AddDestinationForm,
    /// Open detail panel and the row it belongs to, kept across frames so
    /// the user can pan and zoom its map.
    pub(crate) detail: Option<(usize, DestinationDetail)>,

    // Host services
    pub(crate) camera: CaptureBridge,
    pub(crate) textures: AssetTextures,
    pub(crate) photo_texture: Option<egui::TextureHandle>,

    pub(crate) preferences: AppPreferences,
    last_revision: u64,
}

impl WayfarerApp {
    pub(crate) fn new(prefs: AppPreferences) -> Self {
        let navigator = Navigator::new(seed_destinations(), prefs.added_destination_policy());
        info!(
            "Loaded {} destinations (added destinations: {:?})",
            navigator.destinations().len(),
            navigator.policy()
        );
        Self {
            navigator,
            login: LoginForm::new(),
            browse: BrowseState::new(),
            add_form: AddDestinationForm::new(),
            detail: None,
            camera: CaptureBridge::new(),
            textures: AssetTextures::default(),
            photo_texture: None,
            preferences: prefs,
            last_revision: 0,
        }
    }

    /// Log a transition the UI should not have been able to request.
    pub(crate) fn report(&self, result: Result<(), CoreError>) {
        if let Err(e) = result {
            warn!("Ignored: {e}");
        }
    }

    /// Apply pending navigator events to per-screen state.
    ///
    /// Leaving the list closes its detail panel; entering the add screen
    /// starts from an empty form. Returns true if anything changed.
    pub(crate) fn apply_nav_events(&mut self) -> bool {
        if self.navigator.revision() == self.last_revision {
            return false;
        }
        self.last_revision = self.navigator.revision();
        for event in self.navigator.drain_events() {
            match event {
                NavEvent::ScreenChanged { from, to } => {
                    info!("Screen changed: {from} -> {to}");
                    if from == Screen::MainList {
                        self.browse.clear();
                        self.detail = None;
                    }
                    if to == Screen::AddDestination {
                        self.add_form = AddDestinationForm::new();
                        self.photo_texture = None;
                    }
                }
                NavEvent::Authenticated => {
                    self.login = LoginForm::new();
                }
                NavEvent::DestinationAdded { index } => {
                    info!("Destination list now has {} entries", index + 1);
                }
                NavEvent::DestinationDiscarded { name } => {
                    info!("Destination {name:?} was not kept");
                }
            }
        }
        true
    }

    fn poll_capture(&mut self, ctx: &egui::Context) {
        if self.camera.poll(&mut self.add_form) {
            self.photo_texture = self.add_form.photo().map(|photo| {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [photo.width as usize, photo.height as usize],
                    &photo.rgba,
                );
                ctx.load_texture("captured_photo", image, egui::TextureOptions::LINEAR)
            });
            ctx.request_repaint();
        }
    }
}

impl eframe::App for WayfarerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.preferences.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.poll_capture(ctx);

        match self.navigator.screen() {
            Screen::Authentication => self.draw_login(ctx),
            Screen::MainList => self.draw_destination_list(ctx),
            Screen::AddDestination => self.draw_add_destination(ctx),
        }

        if self.apply_nav_events() {
            ctx.request_repaint();
        }

        // Capture results arrive off-thread; keep polling while one is out.
        if self.add_form.is_capturing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::{CaptureLedger, LoginOutcome};

    fn logged_in_app() -> WayfarerApp {
        let mut app = WayfarerApp::new(AppPreferences::default());
        app.login.username = "user".into();
        app.login.password = "secret".into();
        assert_eq!(app.login.submit(), LoginOutcome::Authenticated);
        app.navigator.authenticate().unwrap();
        assert!(app.apply_nav_events());
        app
    }

    #[test]
    fn login_form_is_cleared_after_authentication() {
        let app = logged_in_app();
        assert_eq!(app.navigator.screen(), Screen::MainList);
        assert!(app.login.username.is_empty());
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn no_events_means_no_change() {
        let mut app = logged_in_app();
        assert!(!app.apply_nav_events());
    }

    #[test]
    fn leaving_the_list_closes_the_detail_panel() {
        let mut app = logged_in_app();
        app.select_destination(2);
        assert_eq!(app.browse.selected(), Some(2));
        assert!(app.detail.is_some());

        app.navigator.open_add().unwrap();
        assert!(app.apply_nav_events());
        app.navigator.cancel_add().unwrap();
        assert!(app.apply_nav_events());

        assert_eq!(app.navigator.screen(), Screen::MainList);
        assert_eq!(app.browse.selected(), None);
        assert!(app.detail.is_none());
    }

    #[test]
    fn add_screen_starts_from_an_empty_form() {
        let mut app = logged_in_app();
        app.navigator.open_add().unwrap();
        app.apply_nav_events();

        app.add_form.name = "Half typed".into();
        app.add_form.description = "Left over".into();
        let mut ledger = CaptureLedger::new();
        app.add_form.take_photo(&mut ledger);
        app.navigator.cancel_add().unwrap();
        app.apply_nav_events();

        app.navigator.open_add().unwrap();
        app.apply_nav_events();
        assert!(app.add_form.name.is_empty());
        assert!(app.add_form.description.is_empty());
        assert!(!app.add_form.is_capturing());
        assert!(app.add_form.photo().is_none());
        assert!(app.photo_texture.is_none());
    }
}
