/// Brain mesh asset, resolved against the Bevy asset root.
pub const BRAIN_ASSET_PATH: &str = "brain.glb";

/// Named glTF node whose first primitive is the brain geometry.
pub const BRAIN_MESH_NODE: &str = "Material2006";

/// Point-sprite mask. Alpha below the cutoff is discarded to shape each point.
pub const POINT_SPRITE_TEXTURE_PATH: &str = "triangle.png";

/// Optional viewer settings. Missing or malformed files fall back to defaults.
pub const VIEWER_SETTINGS_PATH: &str = "viewer.settings.json";

pub const POINT_CLOUD_SHADER_PATH: &str = "shaders/point_cloud.wgsl";
pub const DISTORTION_SHADER_PATH: &str = "shaders/distortion.wgsl";
