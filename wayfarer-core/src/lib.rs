pub mod add;
pub mod auth;
pub mod browse;
pub mod camera;
pub mod destination;
pub mod error;
pub mod map;
pub mod navigator;
pub mod seed;

// Re-export primary types for convenience.
pub use add::AddDestinationForm;
pub use auth::{LoginForm, LoginOutcome};
pub use browse::{BrowseState, DestinationDetail, DestinationRow};
pub use camera::{CaptureLedger, CaptureOutcome, CaptureRequest, CaptureResult, Photo, RequestId};
pub use destination::{Destination, ImageAsset};
pub use error::CoreError;
pub use map::{LatLng, MapView, Marker};
pub use navigator::{AddedDestinationPolicy, NavAction, NavEvent, Navigator, Screen};
pub use seed::seed_destinations;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
