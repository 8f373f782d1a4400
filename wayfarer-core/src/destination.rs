use std::fmt;

use serde::{Deserialize, Serialize};

use crate::map::LatLng;

/// Image bundled with the application, referenced by a static key.
///
/// The core never loads pixels; the UI resolves the key against its
/// embedded resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAsset {
    Destination1,
    Destination2,
    Destination3,
    Destination4,
    Destination5,
}

impl ImageAsset {
    /// Image given to destinations created from the add form.
    pub const PLACEHOLDER: ImageAsset = ImageAsset::Destination5;

    pub const ALL: [ImageAsset; 5] = [
        ImageAsset::Destination1,
        ImageAsset::Destination2,
        ImageAsset::Destination3,
        ImageAsset::Destination4,
        ImageAsset::Destination5,
    ];

    /// Stable resource key, also the asset's file stem.
    pub fn key(self) -> &'static str {
        match self {
            Self::Destination1 => "destination1",
            Self::Destination2 => "destination2",
            Self::Destination3 => "destination3",
            Self::Destination4 => "destination4",
            Self::Destination5 => "destination5",
        }
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A place the user can browse to.
///
/// Fields are private: a destination is a value, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    name: String,
    description: String,
    latitude: f64,
    longitude: f64,
    image: ImageAsset,
}

impl Destination {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
        image: ImageAsset,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            latitude,
            longitude,
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn image(&self) -> ImageAsset {
        self.image
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
