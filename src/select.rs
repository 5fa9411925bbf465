use std::collections::HashSet;
use std::ops::Deref;

use crate::error::ReconstructError;
use crate::points::Point;

/// A non-empty set of points with pairwise distinct x-coordinates, ready for
/// interpolation. Only [`select_points`] creates one.
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    points: &'a [Point],
}

impl<'a> Selection<'a> {
    pub fn points(&self) -> &'a [Point] {
        self.points
    }
}

impl Deref for Selection<'_> {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        self.points
    }
}

/// Takes the first `threshold` points, i.e. the lowest indices that decoded.
///
/// Any `threshold` points of a consistent share set determine the same
/// polynomial; picking the lowest ones keeps the output deterministic.
pub fn select_points(points: &[Point], threshold: usize) -> Result<Selection<'_>, ReconstructError> {
    if threshold == 0 {
        return Err(ReconstructError::InvalidParameters {
            share_count: points.len() as i64,
            threshold: 0,
        });
    }
    if points.len() < threshold {
        return Err(ReconstructError::InsufficientPoints {
            required: threshold,
            actual: points.len(),
        });
    }

    let selected = &points[..threshold];

    let mut seen = HashSet::with_capacity(threshold);
    for point in selected {
        if !seen.insert(point.x()) {
            return Err(ReconstructError::DuplicateCoordinate(point.x()));
        }
    }

    Ok(Selection { points: selected })
}
