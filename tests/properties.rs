//! Property-based tests for tour operators and the evolution engine.

use proptest::prelude::*;
use u_tsp::ga::crossover::{insert_segment, segment_crossover};
use u_tsp::ga::mutation::{greedy_relocation, random_swap, relocate_first_improvement};
use u_tsp::ga::{EvolutionConfig, EvolutionEngine, GenerationReport, Population};
use u_tsp::geometry::City;
use u_tsp::random::create_rng;
use u_tsp::tour::{tour_length, Tour};

/// Between 2 and 12 cities on a 1000x1000 canvas.
fn cities_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((0.0..1000.0f64, 0.0..1000.0f64), 2..12)
        .prop_map(|pts| pts.into_iter().map(City::from).collect())
}

/// Cities together with a random permutation of their indices.
fn cities_and_tour() -> impl Strategy<Value = (Vec<City>, Tour)> {
    cities_strategy().prop_flat_map(|cities| {
        let n = cities.len();
        (
            Just(cities),
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
        )
            .prop_map(|(cities, order)| (cities, Tour::new(order)))
    })
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn length_invariant_under_rotation((cities, tour) in cities_and_tour(), k in 0usize..12) {
        let len = tour.length(&cities);
        let mut rotated = tour.order().to_vec();
        let k = k % rotated.len();
        rotated.rotate_left(k);
        prop_assert!(relative_eq(tour_length(&cities, &rotated), len));
    }

    #[test]
    fn length_invariant_under_reversal((cities, tour) in cities_and_tour()) {
        let len = tour.length(&cities);
        let mut reversed = tour.order().to_vec();
        reversed.reverse();
        prop_assert!(relative_eq(tour_length(&cities, &reversed), len));
    }

    #[test]
    fn crossover_children_are_permutations(
        (cities, a) in cities_and_tour(),
        seed in any::<u64>(),
    ) {
        let n = cities.len();
        let mut rng = create_rng(seed);
        let mut b = Tour::new(a.order().iter().rev().copied().collect());
        random_swap(&mut b, &mut rng);

        let (c1, c2) = segment_crossover(&a, &b, &cities, &mut rng);
        prop_assert!(c1.is_permutation_of(n));
        prop_assert!(c2.is_permutation_of(n));
        prop_assert!(c1.length(&cities) <= b.length(&cities));
        prop_assert!(c2.length(&cities) <= a.length(&cities));
    }

    #[test]
    fn every_segment_gives_permutation((cities, a) in cities_and_tour(), seed in any::<u64>()) {
        let n = cities.len();
        let mut rng = create_rng(seed);
        let mut b = a.clone();
        for _ in 0..n {
            random_swap(&mut b, &mut rng);
        }
        for len in 1..n {
            for start in 0..=n - len {
                let child = insert_segment(&a, &b, start, len, &cities);
                prop_assert!(child.is_permutation_of(n));
            }
        }
    }

    #[test]
    fn relocation_never_increases_length((cities, tour) in cities_and_tour(), index in 0usize..12) {
        let index = index % tour.len();
        let before = tour.length(&cities);
        let mut mutated = tour.clone();
        let changed = relocate_first_improvement(&mut mutated, index, &cities);
        prop_assert!(mutated.is_permutation_of(cities.len()));
        if changed {
            prop_assert!(mutated.length(&cities) < before);
        } else {
            prop_assert_eq!(&mutated, &tour);
        }
    }

    #[test]
    fn greedy_relocation_monotone((cities, mut tour) in cities_and_tour(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        for _ in 0..10 {
            let before = tour.length(&cities);
            greedy_relocation(&mut tour, &cities, &mut rng);
            prop_assert!(tour.length(&cities) <= before);
        }
    }

    #[test]
    fn initial_population_is_valid(n in 1usize..30, size in 1usize..40, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let pop = Population::random(n, size, &mut rng);
        prop_assert_eq!(pop.len(), size);
        for tour in pop.tours() {
            prop_assert!(tour.is_permutation_of(n));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn engine_is_deterministic(cities in cities_strategy(), seed in any::<u64>()) {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_generations(30);

        let run = || {
            let mut engine = EvolutionEngine::new(cities.clone(), config.clone(), create_rng(seed))
                .expect("valid input");
            let mut snapshots = Vec::new();
            engine.run(|r: &GenerationReport<'_>| snapshots.push(r.population.clone()));
            snapshots
        };

        prop_assert_eq!(run(), run());
    }

    #[test]
    fn engine_best_so_far_monotone(cities in cities_strategy(), seed in any::<u64>()) {
        let config = EvolutionConfig::default()
            .with_population_size(8)
            .with_generations(50)
            .with_mutation_rate(1.0);
        let n = cities.len();
        let mut engine = EvolutionEngine::new(cities, config, create_rng(seed))
            .expect("valid input");
        let mut valid = true;
        let result = engine.run(|r: &GenerationReport<'_>| {
            valid &= r.population.tours().iter().all(|t| t.is_permutation_of(n));
        });
        prop_assert!(valid);
        for w in result.fitness_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
        prop_assert!(result.best.is_permutation_of(n));
    }
}
