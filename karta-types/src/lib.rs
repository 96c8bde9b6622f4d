//! Geometry types for vector GIS data.
//!
//! The crate provides [`Point`], [`Polyline`] and [`Polygon`] types with 2 or 3 coordinates, together with the
//! algorithms working on them:
//!
//! * planar kernel functions ([`cartesian`]): nearest point on a segment, ray intersection, walking along a bearing;
//! * metrics and queries of geometries: length, area, containment test, nearest point ([`Multipoint`]);
//! * great circle distances between points given as longitude and latitude ([`geo`]);
//! * attribute tables ([`metadata`]) and survey transect correction ([`transect`]).
//!
//! Geometries can be converted into types of other libraries through a [`GeometryAdapter`]. With the `geo-types`
//! feature (enabled by default) the [`GeoTypesAdapter`] is available.

pub mod adapter;
pub mod cartesian;
pub mod error;
pub mod geo;
pub mod metadata;
pub mod multipoint;
pub mod transect;

#[cfg(feature = "geo-types")]
mod geo_types;

mod point;
mod polygon;
mod polyline;

pub use adapter::{GeometryAdapter, ToExternal};
pub use error::{KartaTypesError, Result};
#[cfg(feature = "geo-types")]
pub use self::geo_types::GeoTypesAdapter;
pub use multipoint::{EdgeIterator, Multipoint};
pub use point::*;
pub use polygon::Polygon;
pub use polyline::Polyline;
