use num_bigint::BigInt;

use crate::document::{Entry, RawShare, ShareDocument};
use crate::error::ReconstructError;
use crate::radix;
use crate::ShareIndex;

/// One decoded sample `(x, y)` of the hidden polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Point {
    x: ShareIndex,
    y: BigInt,
}

impl Point {
    pub fn new(x: ShareIndex, y: BigInt) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> ShareIndex {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// A share entry that could not be turned into a point.
#[derive(Debug)]
pub struct Rejected {
    pub index: ShareIndex,
    pub reason: ReconstructError,
}

/// Output of [`build_points`]: decoded points in increasing x order and the
/// entries that were dropped on the way.
#[derive(Debug, Default)]
pub struct PointSet {
    pub points: Vec<Point>,
    pub rejected: Vec<Rejected>,
}

/// Decodes the entries `"1"..="n"` of `document` into points.
///
/// Absent indices are skipped. An entry that is malformed or whose value
/// does not decode is reported in [`PointSet::rejected`] and does not stop
/// the remaining entries from being decoded.
pub fn build_points(document: &ShareDocument, share_count: usize) -> PointSet {
    let mut indices: Vec<ShareIndex> = document
        .entries
        .keys()
        .filter_map(|key| share_index(key, share_count))
        .collect();
    indices.sort_unstable();

    let mut set = PointSet::default();
    for index in indices {
        let decoded = match document.entry(index) {
            Some(Entry::Share(share)) => decode_share(share),
            Some(Entry::Malformed(value)) => Err(ReconstructError::MalformedEntry(format!(
                "expected {{\"base\", \"value\"}}, found {}",
                value
            ))),
            None => continue,
        };
        match decoded {
            Ok(y) => set.points.push(Point::new(index, y)),
            Err(reason) => set.rejected.push(Rejected { index, reason }),
        }
    }
    set
}

/// Parses a document key as a share index in `1..=share_count`. Only the
/// canonical decimal spelling counts, so `"01"` or `"+1"` are ignored.
fn share_index(key: &str, share_count: usize) -> Option<ShareIndex> {
    let index: ShareIndex = key.parse().ok()?;
    let in_range = index >= 1 && usize::try_from(index).map_or(false, |i| i <= share_count);
    (in_range && index.to_string() == key).then_some(index)
}

fn decode_share(share: &RawShare) -> Result<BigInt, ReconstructError> {
    let base = u32::try_from(share.base.value()).map_err(|_| {
        ReconstructError::MalformedEntry(format!("base {} is out of range", share.base.value()))
    })?;
    Ok(radix::decode(&share.value, base)?)
}
