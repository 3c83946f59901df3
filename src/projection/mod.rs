//! Map projections onto a unit sphere
//!
//! Projected coordinates are in sphere radii with the origin at the
//! projection centre and y pointing north. A [`Viewport`](crate::Viewport)
//! turns them into pixels.

pub mod orthographic;
pub mod robinson;

use crate::core::geo::{LatLng, Point};

pub use orthographic::Orthographic;
pub use robinson::Robinson;

pub trait Projection {
    /// Projects a location; `None` when it is not visible in this projection
    fn project(&self, location: &LatLng) -> Option<Point>;

    /// Inverse of [`project`](Projection::project); `None` outside the map
    fn unproject(&self, point: &Point) -> Option<LatLng>;

    /// Half width and half height of the projected world
    fn half_extent(&self) -> Point;
}
