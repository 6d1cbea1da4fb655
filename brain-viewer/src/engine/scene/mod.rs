//! Scene composition for the brain renderers.

/// Brain root, the three renderers and their handle registry.
pub mod brain;
