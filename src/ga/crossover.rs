//! Segment best-insertion crossover.
//!
//! An order-preserving crossover tailored to tours: a contiguous segment is
//! cut out of the donor, the recipient keeps its own visiting order for the
//! remaining cities, and the segment is re-inserted as a block at whichever
//! position yields the shortest tour.
//!
//! # Algorithm
//!
//! 1. Pick a segment length `L` in `[1, n-1]` and a start so that
//!    `[start, start + L)` lies within the donor
//! 2. Remove the segment's cities from the recipient, keeping its order
//! 3. Try every insertion point `0..=remainder.len()` for the segment
//! 4. Keep the strictly shortest candidate; if none is strictly shorter than
//!    the recipient, the recipient itself is the child
//!
//! # Complexity
//! O(n²) time per child (n insertion points × O(n) evaluation), O(n) space

use rand::Rng;

use crate::geometry::City;
use crate::tour::{tour_length, Tour};

/// Produces two children from parents `a` and `b`.
///
/// `child1` inserts a segment of `a` into `b`'s remainder; `child2` inserts a
/// segment of `b` into `a`'s remainder. The segments are drawn independently.
///
/// # Panics
/// Panics if the parents have different lengths or fewer than 2 cities.
pub fn segment_crossover<R: Rng>(
    a: &Tour,
    b: &Tour,
    cities: &[City],
    rng: &mut R,
) -> (Tour, Tour) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 cities");

    let (start, len) = random_segment(n, rng);
    let child1 = insert_segment(a, b, start, len, cities);

    let (start, len) = random_segment(n, rng);
    let child2 = insert_segment(b, a, start, len, cities);

    (child1, child2)
}

/// Builds one child from `donor[start..start + len]` and `recipient`.
///
/// Deterministic given the segment, which makes it exhaustively testable.
///
/// # Panics
/// Panics if the segment does not lie within `donor`.
pub fn insert_segment(
    donor: &Tour,
    recipient: &Tour,
    start: usize,
    len: usize,
    cities: &[City],
) -> Tour {
    let segment = &donor.order()[start..start + len];

    let mut in_segment = vec![false; recipient.len().max(donor.len())];
    for &c in segment {
        in_segment[c] = true;
    }
    let remainder: Vec<usize> = recipient
        .order()
        .iter()
        .copied()
        .filter(|&c| !in_segment[c])
        .collect();

    let mut best: Option<Vec<usize>> = None;
    let mut best_len = recipient.length(cities);
    let mut candidate = Vec::with_capacity(remainder.len() + segment.len());

    for j in 0..=remainder.len() {
        candidate.clear();
        candidate.extend_from_slice(&remainder[..j]);
        candidate.extend_from_slice(segment);
        candidate.extend_from_slice(&remainder[j..]);

        let len = tour_length(cities, &candidate);
        if len < best_len {
            best_len = len;
            best = Some(candidate.clone());
        }
    }

    let child = match best {
        Some(order) => Tour::new(order),
        None => recipient.clone(),
    };
    debug_assert!(
        child.is_permutation_of(recipient.len()),
        "crossover child is not a permutation: {child:?}"
    );
    child
}

/// Pick `(start, len)` with `len` in `[1, n-1]` and `start + len <= n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let len = rng.random_range(1..n);
    let start = rng.random_range(0..=n - len);
    (start, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn pentagon() -> Vec<City> {
        (0..5)
            .map(|i| {
                let theta = i as f64 * std::f64::consts::TAU / 5.0;
                City::new(theta.cos(), theta.sin())
            })
            .collect()
    }

    // A=0, B=1, C=2, D=3, E=4
    fn parents() -> (Tour, Tour) {
        (Tour::new(vec![0, 1, 2, 3, 4]), Tour::new(vec![2, 0, 4, 1, 3]))
    }

    #[test]
    fn test_every_segment_yields_permutations() {
        let cities = pentagon();
        let (a, b) = parents();
        for len in 1..5 {
            for start in 0..=5 - len {
                let c1 = insert_segment(&a, &b, start, len, &cities);
                let c2 = insert_segment(&b, &a, start, len, &cities);
                assert!(c1.is_permutation_of(5), "child1 {c1:?} at {start}+{len}");
                assert!(c2.is_permutation_of(5), "child2 {c2:?} at {start}+{len}");
            }
        }
    }

    #[test]
    fn test_child_never_longer_than_recipient() {
        let cities = pentagon();
        let (a, b) = parents();
        for len in 1..5 {
            for start in 0..=5 - len {
                let child = insert_segment(&a, &b, start, len, &cities);
                assert!(child.length(&cities) <= b.length(&cities) + 1e-12);
            }
        }
    }

    #[test]
    fn test_optimal_recipient_returned_unchanged() {
        // Unit square: every optimal candidate sums to exactly 4.0, so ties
        // must fall back to the recipient's own order.
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ];
        let donor = Tour::new(vec![2, 0, 3, 1]);
        let recipient = Tour::identity(4);
        for len in 1..4 {
            for start in 0..=4 - len {
                let child = insert_segment(&donor, &recipient, start, len, &cities);
                assert_eq!(child, recipient);
            }
        }
    }

    #[test]
    fn test_segment_is_contiguous_in_child() {
        let cities = pentagon();
        let donor = Tour::identity(5);
        let recipient = Tour::new(vec![0, 2, 4, 1, 3]);
        // Segment [1, 2, 3] inserted into remainder [0, 4]: the best candidate is
        // the optimal cycle 0,1,2,3,4 (or a rotation), far shorter than the star.
        let child = insert_segment(&donor, &recipient, 1, 3, &cities);
        let pos = child
            .order()
            .iter()
            .position(|&c| c == 1)
            .expect("city 1 present");
        assert_eq!(&child.order()[pos..pos + 3], &[1, 2, 3]);
        assert!((child.length(&cities) - donor.length(&cities)).abs() < 1e-12);
    }

    #[test]
    fn test_crossover_with_self_is_identity() {
        let cities = pentagon();
        let mut rng = create_rng(3);
        let p = Tour::new(vec![4, 2, 0, 3, 1]);
        for _ in 0..20 {
            let (c1, c2) = segment_crossover(&p, &p, &cities, &mut rng);
            assert!(c1.length(&cities) <= p.length(&cities));
            assert!(c2.length(&cities) <= p.length(&cities));
            assert!(c1.is_permutation_of(5));
            assert!(c2.is_permutation_of(5));
        }
    }

    #[test]
    fn test_two_cities() {
        let cities = vec![City::new(0.0, 0.0), City::new(1.0, 0.0)];
        let mut rng = create_rng(42);
        let a = Tour::new(vec![0, 1]);
        let b = Tour::new(vec![1, 0]);
        for _ in 0..20 {
            let (c1, c2) = segment_crossover(&a, &b, &cities, &mut rng);
            assert!(c1.is_permutation_of(2));
            assert!(c2.is_permutation_of(2));
        }
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, len) = random_segment(10, &mut rng);
            assert!((1..10).contains(&len));
            assert!(start + len <= 10);
        }
    }

    #[test]
    #[should_panic(expected = "at least 2 cities")]
    fn test_single_city_panics() {
        let cities = vec![City::new(0.0, 0.0)];
        let mut rng = create_rng(42);
        let t = Tour::identity(1);
        let _ = segment_crossover(&t, &t, &cities, &mut rng);
    }
}
