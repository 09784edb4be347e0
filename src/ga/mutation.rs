//! Tour mutation operators.
//!
//! - [`greedy_relocation`]: move one random city to the first position that
//!   shortens the tour; never worsens it
//! - [`random_swap`]: exchange two random positions for diversity, O(1)

use rand::Rng;

use crate::geometry::City;
use crate::tour::{tour_length, Tour};

/// Relocates one randomly chosen city to its first improving position.
///
/// Returns `true` if the tour changed. The resulting length is never greater
/// than the original.
pub fn greedy_relocation<R: Rng>(tour: &mut Tour, cities: &[City], rng: &mut R) -> bool {
    let n = tour.len();
    if n < 2 {
        return false;
    }
    let index = rng.random_range(0..n);
    relocate_first_improvement(tour, index, cities)
}

/// Removes the city at `index` and scans insertion points `0..n` in order,
/// keeping the first one that makes the tour strictly shorter.
///
/// If no insertion point improves on the original, the tour is restored
/// exactly and `false` is returned.
///
/// # Complexity
/// O(n²) worst case: n insertion points × O(n) evaluation
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn relocate_first_improvement(tour: &mut Tour, index: usize, cities: &[City]) -> bool {
    let original = tour.length(cities);
    let order = tour.order_mut();
    let n = order.len();
    let city = order.remove(index);

    for j in 0..n {
        order.insert(j, city);
        if tour_length(cities, order) < original {
            return true;
        }
        order.remove(j);
    }

    order.insert(index, city);
    false
}

/// Swaps the cities at two independently drawn positions.
///
/// Unconditional: the tour may get longer. Both draws may hit the same
/// position, leaving the tour unchanged.
pub fn random_swap<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    tour.order_mut().swap(i, j);
}
