//! Measurements on the surface of a sphere, with points given as longitude (`x`) and latitude (`y`).

mod great_circle;

pub use great_circle::{
    great_circle_distance, great_circle_distances, AngularUnit, DistanceMethod, SpaceUnit,
    EARTH_RADIUS_KM,
};
