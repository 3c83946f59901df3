//! Drawable parts of the figure, composed by z-index

pub mod annotation;
pub mod base;
pub mod basemap;
pub mod decoration;
pub mod globe;
pub mod scatter;

pub use annotation::YearLabelLayer;
pub use base::{FrameContext, Layer, LayerProperties, LayerStack, LayerType};
pub use basemap::BasemapLayer;
pub use decoration::{ColorbarLayer, TitleLayer};
pub use globe::GlobeLayer;
pub use scatter::{MarkerSet, ScatterLayer};
