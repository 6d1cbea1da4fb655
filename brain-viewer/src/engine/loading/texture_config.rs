use bevy::image::{ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::engine::assets::brain_assets::BrainAssets;
use crate::engine::loading::progress::LoadingProgress;

// Sprites are scaled and rotated per frame, so sample with linear filtering.
pub fn configure_point_texture(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<BrainAssets>,
    mut images: ResMut<Assets<Image>>,
) {
    if loading_progress.texture_configured || !loading_progress.texture_loaded {
        return;
    }

    if let Some(image) = images.get_mut(&assets.point_texture) {
        image.sampler = sprite_sampler();
        debug!("Point sprite sampler configured");
    }
    loading_progress.texture_configured = true;
}

pub fn sprite_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        ..default()
    })
}
