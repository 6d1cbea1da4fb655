pub mod asset_paths;
pub mod coordinate_system;
pub mod palette;
pub mod render_settings;
