use thiserror::Error;

/// Failures while turning the loaded glTF into renderable brain geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrainAssetError {
    #[error("glTF asset has no node named `{0}`")]
    MissingNode(String),

    #[error("glTF node `{0}` is not loaded")]
    NodeNotLoaded(String),

    #[error("glTF node `{0}` carries no mesh")]
    NodeWithoutMesh(String),

    #[error("mesh on node `{0}` has no primitives")]
    EmptyMesh(String),

    #[error("geometry for node `{0}` is not loaded")]
    GeometryNotLoaded(String),

    #[error("geometry has no Float32x3 `{0}` attribute")]
    MissingAttribute(&'static str),

    #[error("geometry has {0} vertices, more than a point-sprite mesh can index")]
    TooManyVertices(usize),
}
