use crate::point::Point;

/// Returns the point reached by moving `distance` from `start`.
///
/// `bearing` is the horizontal direction in radians, clockwise from the positive `y` axis (as returned by
/// [`Point::bearing`]). `azimuth` is the vertical angle in radians above the horizontal plane (as returned by
/// [`Point::azimuth`]).
///
/// The result has the rank of `start`. A rank 2 start point has no vertical component to move along, so a non-zero
/// `azimuth` only shortens the horizontal step and a warning is logged.
pub fn walk(start: &Point, distance: f64, bearing: f64, azimuth: f64) -> Point {
    let horizontal = distance * azimuth.cos();
    let vertical = distance * azimuth.sin();
    let dx = horizontal * bearing.sin();
    let dy = horizontal * bearing.cos();

    match start.z() {
        Some(z) => Point::new_3d(start.x() + dx, start.y() + dy, z + vertical),
        None => {
            if azimuth != 0.0 {
                log::warn!(
                    "Walking from a rank 2 point with azimuth {azimuth}, vertical component is ignored"
                );
            }
            Point::new(start.x() + dx, start.y() + dy)
        }
    }
}
