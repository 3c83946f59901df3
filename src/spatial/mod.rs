pub mod coastline;
pub mod land_mask;

pub use coastline::{Coastline, COASTLINES};
pub use land_mask::LandMask;
