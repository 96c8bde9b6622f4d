//! Corrections of survey transects.

use crate::error::{KartaTypesError, Result};

/// Converts distances measured with a tape laid along the ground into horizontal distances.
///
/// `distances` are the positions of the stations along the tape and `elevations` are the heights of the stations.
/// Between two stations the tape follows the slope, so the horizontal offset is `sqrt(dx² - dz²)`. The first station
/// keeps its position. Returns the corrected position and the elevation of every station.
///
/// If a tape segment is shorter than the height difference it spans, the corrected position of the following
/// stations is `NaN`.
///
/// ```
/// use karta_types::transect::tighten;
///
/// let stations = tighten(&[0.0, 5.0, 10.0], &[0.0, 3.0, 3.0]).unwrap();
/// assert_eq!(stations, vec![(0.0, 0.0), (4.0, 3.0), (9.0, 3.0)]);
/// ```
pub fn tighten(distances: &[f64], elevations: &[f64]) -> Result<Vec<(f64, f64)>> {
    if distances.len() != elevations.len() {
        return Err(KartaTypesError::LengthMismatch {
            left: distances.len(),
            right: elevations.len(),
        });
    }

    let Some((&first, &first_z)) = distances.first().zip(elevations.first()) else {
        return Ok(vec![]);
    };

    let mut position = first;
    let mut result = Vec::with_capacity(distances.len());
    result.push((position, first_z));

    for (x, z) in distances.windows(2).zip(elevations.windows(2)) {
        let dx = x[1] - x[0];
        let dz = z[1] - z[0];
        position += (dx * dx - dz * dz).sqrt();
        result.push((position, z[1]));
    }

    Ok(result)
}
