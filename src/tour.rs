//! Tour representation and length evaluation.
//!
//! A [`Tour`] is a permutation of city indices read as a closed cycle: the
//! last city connects back to the first. Length is never cached on the tour;
//! [`tour_length`] recomputes it from the immutable city list.

use crate::geometry::{distance, City};

/// Total length of the closed cycle visiting `order`.
///
/// Sums consecutive edges plus the closing edge from the last city back to
/// the first. A single city (or an empty order) has length 0.
///
/// # Panics
///
/// Panics if an index in `order` is out of bounds for `cities`.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::tour::tour_length;
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// assert!((tour_length(&square, &[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// ```
pub fn tour_length(cities: &[City], order: &[usize]) -> f64 {
    let (first, last) = match (order.first(), order.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return 0.0,
    };
    let open: f64 = order
        .windows(2)
        .map(|w| distance(&cities[w[0]], &cities[w[1]]))
        .sum();
    open + distance(&cities[last], &cities[first])
}

/// Returns `true` if `order` visits every index in `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &c in order {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}

/// A closed tour over a city list, stored as visiting order of city indices.
///
/// Each tour owns its sequence; cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Closed-cycle length over `cities`.
    pub fn length(&self, cities: &[City]) -> f64 {
        tour_length(cities, &self.order)
    }

    /// Returns `true` if this tour is a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        is_permutation(&self.order, n)
    }

    /// Resolves the visiting order to coordinates.
    pub fn to_cities(&self, cities: &[City]) -> Vec<City> {
        self.order.iter().map(|&i| cities[i]).collect()
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self::new(order)
    }
}
