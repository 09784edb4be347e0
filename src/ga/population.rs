//! Population of tours.
//!
//! A [`Population`] has a fixed size for the whole run. Between generations
//! it is kept sorted ascending by tour length, so slot 0 is the best tour
//! and the last two slots are the two worst.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::City;
use crate::tour::Tour;

/// Fixed-size collection of independently owned tours.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Builds `size` independently shuffled permutations of `0..n_cities`.
    ///
    /// Each tour is a uniform random permutation with its own storage.
    pub fn random<R: Rng>(n_cities: usize, size: usize, rng: &mut R) -> Self {
        let tours = (0..size)
            .map(|_| {
                let mut order: Vec<usize> = (0..n_cities).collect();
                order.shuffle(rng);
                Tour::new(order)
            })
            .collect();
        Self { tours }
    }

    /// Wraps existing tours, e.g. a seeded or hand-built population.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if the population has no slots.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// All tours in slot order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Tour in slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn tour(&self, index: usize) -> &Tour {
        &self.tours[index]
    }

    /// Slot 0. The best tour once the population is sorted.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Tour {
        &self.tours[0]
    }

    pub(crate) fn tour_mut(&mut self, index: usize) -> &mut Tour {
        &mut self.tours[index]
    }

    pub(crate) fn replace(&mut self, index: usize, tour: Tour) {
        self.tours[index] = tour;
    }

    /// Lengths of every tour, in slot order.
    pub fn lengths(&self, cities: &[City], parallel: bool) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        if parallel {
            use rayon::prelude::*;
            return self.tours.par_iter().map(|t| t.length(cities)).collect();
        }
        let _ = parallel;
        self.tours.iter().map(|t| t.length(cities)).collect()
    }

    /// Sorts ascending by tour length.
    ///
    /// The sort is stable, so equally long tours keep their relative order
    /// and runs stay reproducible. With `parallel` (and the `parallel`
    /// feature) only the length computation is parallelized.
    pub fn sort_by_length(&mut self, cities: &[City], parallel: bool) {
        let lengths = self.lengths(cities, parallel);
        let mut keyed: Vec<(f64, Tour)> = lengths
            .into_iter()
            .zip(std::mem::take(&mut self.tours))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.tours = keyed.into_iter().map(|(_, t)| t).collect();
    }

    /// Returns `true` if the population is sorted ascending by length.
    pub fn is_sorted(&self, cities: &[City]) -> bool {
        self.lengths(cities, false).windows(2).all(|w| w[0] <= w[1])
    }
}

/// Frequency of each distinct tour length, ascending by length.
///
/// A collapsing histogram means the population has converged.
pub fn diversity_histogram(population: &Population, cities: &[City]) -> Vec<(f64, usize)> {
    let mut lengths = population.lengths(cities, false);
    lengths.sort_by(f64::total_cmp);

    let mut histogram: Vec<(f64, usize)> = Vec::new();
    for len in lengths {
        match histogram.last_mut() {
            Some((value, count)) if *value == len => *count += 1,
            _ => histogram.push((len, 1)),
        }
    }
    histogram
}
