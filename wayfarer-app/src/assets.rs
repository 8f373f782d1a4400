use std::collections::{HashMap, HashSet};

use eframe::egui;
use image::imageops::FilterType;
use image::RgbaImage;
use tracing::{debug, warn};

use wayfarer_core::ImageAsset;

/// Side length, in pixels, of decoded list thumbnails (drawn at 64 px).
pub(crate) const THUMBNAIL_SIDE: u32 = 128;

/// Embedded PNG bytes for a bundled asset.
pub(crate) fn asset_bytes(asset: ImageAsset) -> &'static [u8] {
    match asset {
        ImageAsset::Destination1 => include_bytes!("../assets/destination1.png"),
        ImageAsset::Destination2 => include_bytes!("../assets/destination2.png"),
        ImageAsset::Destination3 => include_bytes!("../assets/destination3.png"),
        ImageAsset::Destination4 => include_bytes!("../assets/destination4.png"),
        ImageAsset::Destination5 => include_bytes!("../assets/destination5.png"),
    }
}

/// Centre-crop to a square and resize to `side`×`side`.
pub(crate) fn square_thumbnail(img: &RgbaImage, side: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let crop = w.min(h);
    let x = (w - crop) / 2;
    let y = (h - crop) / 2;
    let cropped = image::imageops::crop_imm(img, x, y, crop, crop).to_image();
    image::imageops::resize(&cropped, side, side, FilterType::Lanczos3)
}

/// Decode a bundled asset into RGBA thumbnail pixels.
pub(crate) fn decode_asset(asset: ImageAsset) -> Option<RgbaImage> {
    let img = image::load_from_memory_with_format(asset_bytes(asset), image::ImageFormat::Png)
        .map_err(|e| warn!("Failed to decode asset {asset}: {e}"))
        .ok()?;
    Some(square_thumbnail(&img.to_rgba8(), THUMBNAIL_SIDE))
}

pub(crate) fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [img.width() as usize, img.height() as usize],
        img.as_raw(),
    )
}

// ---------------------------------------------------------------------------
// Texture cache
// ---------------------------------------------------------------------------

/// GPU textures for bundled assets, decoded lazily on first use.
#[derive(Default)]
pub(crate) struct AssetTextures {
    textures: HashMap<ImageAsset, egui::TextureHandle>,
    failed: HashSet<ImageAsset>,
}

impl AssetTextures {
    pub(crate) fn get(
        &mut self,
        ctx: &egui::Context,
        asset: ImageAsset,
    ) -> Option<&egui::TextureHandle> {
        if self.failed.contains(&asset) {
            return None;
        }
        if !self.textures.contains_key(&asset) {
            let Some(img) = decode_asset(asset) else {
                self.failed.insert(asset);
                return None;
            };
            debug!("Uploaded texture for {asset}");
            let handle = ctx.load_texture(
                format!("asset_{}", asset.key()),
                to_color_image(&img),
                egui::TextureOptions::LINEAR,
            );
            self.textures.insert(asset, handle);
        }
        self.textures.get(&asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_asset_decodes() {
        for asset in ImageAsset::ALL {
            let img = decode_asset(asset).unwrap_or_else(|| panic!("{asset} failed"));
            assert_eq!(img.dimensions(), (THUMBNAIL_SIDE, THUMBNAIL_SIDE));
        }
    }

    #[test]
    fn thumbnail_crops_wide_images_to_square() {
        let mut img = RgbaImage::new(30, 10);
        // Left and right thirds red, centre green.
        for (x, _, px) in img.enumerate_pixels_mut() {
            *px = if (10..20).contains(&x) {
                image::Rgba([0, 255, 0, 255])
            } else {
                image::Rgba([255, 0, 0, 255])
            };
        }
        let thumb = square_thumbnail(&img, 10);
        assert_eq!(thumb.dimensions(), (10, 10));
        assert_eq!(thumb.get_pixel(5, 5).0, [0, 255, 0, 255]);
    }
}
