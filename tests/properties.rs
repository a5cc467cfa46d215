use depot_tour::compute_optimal_route;
use depot_tour::distance::{DistanceMatrix, TableOracle};
use depot_tour::evaluation::{is_permutation, tour_cost};
use depot_tour::models::{Coordinates, Point};
use depot_tour::solver::{exhaustive, held_karp};
use proptest::prelude::*;

/// Square matrices of size 1..=7 with integer costs; roughly one edge in
/// eight is unknown.
fn sparse_matrix() -> impl Strategy<Value = DistanceMatrix> {
    (1usize..=7).prop_flat_map(|n| {
        prop::collection::vec(prop::option::weighted(0.875, 1u32..100), n * n).prop_map(
            move |cells| {
                let mut dm = DistanceMatrix::new(n);
                for (idx, cell) in cells.into_iter().enumerate() {
                    let (i, j) = (idx / n, idx % n);
                    if i != j {
                        if let Some(c) = cell {
                            dm.set(i, j, c as f64);
                        }
                    }
                }
                dm
            },
        )
    })
}

fn points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            Point::new(
                i as u32,
                format!("P{i}"),
                Coordinates::new(28.6 + i as f64 * 0.01, 77.2),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn held_karp_matches_exhaustive(dm in sparse_matrix()) {
        let dp = held_karp(&dm);
        let brute = exhaustive(&dm);
        prop_assert_eq!(dp.cost(), brute.cost());
    }

    #[test]
    fn held_karp_order_is_valid_tour(dm in sparse_matrix()) {
        if let Some(sol) = held_karp(&dm).solution() {
            prop_assert!(is_permutation(sol.order(), dm.size()));
            prop_assert_eq!(tour_cost(&dm, sol.order()), Some(sol.cost()));
        }
    }

    #[test]
    fn held_karp_is_idempotent(dm in sparse_matrix()) {
        prop_assert_eq!(held_karp(&dm).cost(), held_karp(&dm).cost());
    }

    #[test]
    fn symmetric_cost_invariant_under_reversal(
        costs in prop::collection::vec(1u32..50, 21),
        n in 1usize..=7,
    ) {
        let pts = points(n);
        let mut table = TableOracle::new();
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                table
                    .insert_symmetric(pts[i].name(), pts[j].name(), costs[k] as f64)
                    .expect("valid cost");
                k += 1;
            }
        }
        let selection: Vec<Point> = pts[1..].to_vec();
        let mut reversed = selection.clone();
        reversed.reverse();

        let forward = compute_optimal_route(&pts[0], &selection, &table).expect("valid");
        let backward = compute_optimal_route(&pts[0], &reversed, &table).expect("valid");
        prop_assert_eq!(forward.total_cost(), backward.total_cost());
    }
}
