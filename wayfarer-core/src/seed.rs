use crate::destination::{Destination, ImageAsset};

/// The destinations shown on first launch, in display order.
pub fn seed_destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "Destination 1",
            "Description of destination 1",
            48.8566,
            2.3522,
            ImageAsset::Destination1,
        ),
        Destination::new(
            "Destination 2",
            "Description of destination 2",
            34.0522,
            -118.2437,
            ImageAsset::Destination5,
        ),
        Destination::new(
            "Destination 3",
            "Description of destination 3",
            41.8781,
            -87.6298,
            ImageAsset::Destination3,
        ),
        Destination::new(
            "Destination 4",
            "Description of destination 4",
            25.7617,
            -80.1918,
            ImageAsset::Destination4,
        ),
        Destination::new(
            "Destination 5",
            "Description of destination 5",
            51.5074,
            -0.1278,
            ImageAsset::Destination5,
        ),
    ]
}
