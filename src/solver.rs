use std::path::Path;

use num_bigint::BigInt;

use crate::document::{Parameters, ShareDocument};
use crate::error::ReconstructError;
use crate::lagrange::interpolate_at_zero;
use crate::points::build_points;
use crate::select::select_points;
use crate::ShareIndex;

pub struct Reconstruction {
    pub parameters: Parameters,
    /// x-coordinates that were interpolated, in selection order.
    pub selected: Vec<ShareIndex>,
    /// Indices dropped because their entry was malformed or did not decode.
    pub rejected: Vec<ShareIndex>,
    pub secret: BigInt,
}

/// Runs one share document through decode, selection and interpolation.
///
/// Entries that fail to decode are reported on stderr and left out; the
/// reconstruction only fails if too few points remain.
pub fn reconstruct(document: &ShareDocument) -> Result<Reconstruction, ReconstructError> {
    let parameters = document.keys.parameters()?;

    let point_set = build_points(document, parameters.share_count);
    for rejected in &point_set.rejected {
        eprintln!("Error converting point {}: {}", rejected.index, rejected.reason);
    }

    let selection = select_points(&point_set.points, parameters.threshold)?;
    let secret = interpolate_at_zero(&selection);

    Ok(Reconstruction {
        selected: selection.iter().map(|p| p.x()).collect(),
        rejected: point_set.rejected.iter().map(|r| r.index).collect(),
        parameters,
        secret,
    })
}

/// Loads the share document at `path` and recovers its secret.
pub fn solve_secret_sharing(path: impl AsRef<Path>) -> Result<BigInt, ReconstructError> {
    let document = ShareDocument::load(path)?;
    Ok(reconstruct(&document)?.secret)
}
