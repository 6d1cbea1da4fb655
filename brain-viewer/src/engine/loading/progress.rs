use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub scene_loaded: bool,
    pub texture_loaded: bool,
    pub texture_configured: bool,
    pub settings_resolved: bool,
    pub brain_created: bool,
    /// Set once a required asset fails. Loading stops here.
    pub failed: bool,
}

impl LoadingProgress {
    pub fn ready_to_create(&self) -> bool {
        !self.failed
            && !self.brain_created
            && self.scene_loaded
            && self.texture_configured
            && self.settings_resolved
    }
}
