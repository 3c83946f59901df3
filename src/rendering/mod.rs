//! Raster drawing primitives shared by the layers

pub mod canvas;
pub mod colormap;
pub mod layout;
pub mod text;

pub use canvas::Canvas;
pub use colormap::{Colormap, Normalize};
pub use layout::FigureLayout;
pub use text::{HAlign, TextRenderer, VAlign};
