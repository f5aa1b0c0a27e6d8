//! Geodesic distances between points and the nearest-branch search.

use crate::domain::{Branch, Point};
use geo::{Distance, Geodesic};
use std::cmp::Ordering;

/// Shortest distance in kilometers between two points on the WGS84
/// ellipsoid (Karney's algorithm).
pub fn geodesic_km(from: Point, to: Point) -> f64 {
    let from: geo::Point<f64> = from.into();
    let to: geo::Point<f64> = to.into();

    Geodesic.distance(from, to) / 1000.0
}

/// The branch closest to some origin, with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub branch: &'a Branch,
    pub distance_km: f64,
}

/// Linear search for the branch with the smallest geodesic distance from
/// `origin`. Equal distances are broken by the lexicographically smaller
/// address. Returns `None` for an empty slice.
pub fn nearest_branch(origin: Point, branches: &[Branch]) -> Option<Nearest<'_>> {
    branches
        .iter()
        .map(|branch| Nearest {
            branch,
            distance_km: geodesic_km(origin, branch.location),
        })
        .min_by(compare)
}

fn compare(a: &Nearest<'_>, b: &Nearest<'_>) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then_with(|| a.branch.address.cmp(&b.branch.address))
}
