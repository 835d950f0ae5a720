//! Nearest-neighbour lookup over positioned items (NEA stations, cleanup sites) backed by an
//! R-tree, with haversine distances for the final ranking.

use crate::types::location::{LatLon, Positioned};
use ordered_float::OrderedFloat;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Spatial index over items that sit at a single point.
#[derive(Debug, Clone)]
pub struct NearestLocator<T>
where
    T: RTreeObject<Envelope = AABB<[f64; 2]>> + PointDistance + Positioned,
{
    rtree: RTree<T>,
}

// Heap entry, ordered by distance only
struct Candidate<'a, T> {
    distance_km: OrderedFloat<f64>,
    item: &'a T,
}
impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance_km == other.distance_km
    }
}
impl<T> Eq for Candidate<'_, T> {}
impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Candidate<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_km.cmp(&other.distance_km)
    }
}

impl<T> NearestLocator<T>
where
    T: RTreeObject<Envelope = AABB<[f64; 2]>> + PointDistance + Positioned + Clone,
{
    pub fn new(items: Vec<T>) -> Self {
        Self {
            rtree: RTree::bulk_load(items),
        }
    }

    /// Finds up to `n_results` items within `max_distance_km`, closest first, paired with
    /// their distance in km.
    pub fn query(
        &self,
        location: LatLon,
        n_results: usize,
        max_distance_km: f64,
    ) -> Vec<(T, f64)> {
        if n_results == 0 {
            return vec![];
        }

        // Take more candidates than needed: R-tree order is Euclidean in degrees, the final
        // order is haversine.
        let candidate_limit = (n_results * 2).max(20);

        let mut with_distance: Vec<(T, f64)> = self
            .rtree
            .nearest_neighbor_iter(&location.as_point())
            .take(candidate_limit)
            .filter_map(|item| {
                let dist_km = location.distance_km(item.position());
                (dist_km <= max_distance_km).then(|| (item.clone(), dist_km))
            })
            .collect();

        with_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        with_distance.truncate(n_results);
        with_distance
    }

    /// Like [`NearestLocator::query`], but only considers items accepted by `predicate`.
    ///
    /// Walks the R-tree outward, keeping the best `n_results` in a max-heap, and stops once
    /// candidates are clearly beyond `max_distance_km`.
    pub fn query_filtered<P>(
        &self,
        location: LatLon,
        n_results: usize,
        max_distance_km: f64,
        predicate: P,
    ) -> Vec<(T, f64)>
    where
        P: Fn(&T) -> bool,
    {
        if n_results == 0 {
            return vec![];
        }

        let mut heap: BinaryHeap<Candidate<'_, T>> = BinaryHeap::with_capacity(n_results);

        for item in self.rtree.nearest_neighbor_iter(&location.as_point()) {
            let dist_km = location.distance_km(item.position());

            if dist_km > max_distance_km * 1.5 {
                break;
            }
            if dist_km > max_distance_km || !predicate(item) {
                continue;
            }

            let candidate = Candidate {
                distance_km: OrderedFloat(dist_km),
                item,
            };
            if heap.len() < n_results {
                heap.push(candidate);
            } else if heap
                .peek()
                .is_some_and(|worst| candidate.distance_km < worst.distance_km)
            {
                heap.pop();
                heap.push(candidate);
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| (c.item.clone(), c.distance_km.into_inner()))
            .collect()
    }

    /// The single closest item, with no distance limit.
    pub fn nearest(&self, location: LatLon) -> Option<(T, f64)> {
        self.rtree
            .nearest_neighbor(&location.as_point())
            .map(|item| (item.clone(), location.distance_km(item.position())))
    }
}
