//! One generation of the steady-state replacement scheme.
//!
//! Each generation produces exactly two children. They can only displace the
//! two worst tours, and only when strictly better, so the best tour in the
//! population never gets worse.

use rand::Rng;
use tracing::trace;

use super::crossover::segment_crossover;
use super::mutation::{greedy_relocation, random_swap};
use super::population::Population;
use crate::geometry::City;

/// What happened during one call to [`next_generation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOutcome {
    /// Fraction of the population (best first) parents were drawn from.
    pub mating_fraction: f64,

    /// Slot indices of the two parents.
    pub parents: (usize, usize),

    /// Whether `child1` replaced the second-worst tour.
    pub child1_admitted: bool,

    /// Whether `child2` replaced the worst tour.
    pub child2_admitted: bool,

    /// Slot that received a random swap, if any.
    pub swapped: Option<usize>,
}

/// Runs one generation on a population sorted ascending by length.
///
/// 1. Draw a mating fraction in `[0.050, 0.949]` (thousandths)
/// 2. Draw two parents independently from the top of the population
/// 3. Cross them with [`segment_crossover`]
/// 4. Apply [`greedy_relocation`] to each child
/// 5. `child1` replaces the second-worst tour if strictly shorter; `child2`
///    replaces the worst tour if strictly shorter
/// 6. With probability `mutation_rate`, [`random_swap`] one tour other than
///    the best
///
/// The population is left unsorted; the caller re-sorts before the next
/// generation.
///
/// # Panics
/// Panics if the population is empty or its tours have fewer than 2 cities.
pub fn next_generation<R: Rng>(
    population: &mut Population,
    cities: &[City],
    mutation_rate: f64,
    rng: &mut R,
) -> GenerationOutcome {
    let size = population.len();
    assert!(size > 0, "population must not be empty");

    let mating_fraction = rng.random_range(50..950u32) as f64 / 1000.0;
    let pool = ((size as f64 * mating_fraction) as usize).max(1);

    let p1 = rng.random_range(0..pool);
    let p2 = rng.random_range(0..pool);

    let (mut child1, mut child2) =
        segment_crossover(population.tour(p1), population.tour(p2), cities, rng);

    greedy_relocation(&mut child1, cities, rng);
    greedy_relocation(&mut child2, cities, rng);

    let second_worst = size.saturating_sub(2);
    let worst = size - 1;

    let child1_admitted = child1.length(cities) < population.tour(second_worst).length(cities);
    if child1_admitted {
        population.replace(second_worst, child1);
    }
    let child2_admitted = child2.length(cities) < population.tour(worst).length(cities);
    if child2_admitted {
        population.replace(worst, child2);
    }

    let mut swapped = None;
    if rng.random::<f64>() < mutation_rate && size > 1 {
        let k = rng.random_range(1..size);
        random_swap(population.tour_mut(k), rng);
        swapped = Some(k);
    }

    trace!(
        mating_fraction,
        p1,
        p2,
        child1_admitted,
        child2_admitted,
        ?swapped,
        "generation step"
    );

    GenerationOutcome {
        mating_fraction,
        parents: (p1, p2),
        child1_admitted,
        child2_admitted,
        swapped,
    }
}
