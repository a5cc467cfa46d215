//! Closed-tour cost evaluation.

use crate::distance::DistanceMatrix;

/// Cost of the closed tour `0 → order[0] → … → order[last] → 0`.
///
/// Returns `None` if any leg is unknown. An empty order is the depot-only
/// tour and costs zero.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::DistanceMatrix;
/// use depot_tour::evaluation::tour_cost;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 6.0],
///     vec![2.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tour_cost(&dm, &[1, 2]), Some(9.0));
/// assert_eq!(tour_cost(&dm, &[2, 1]), Some(11.0));
/// assert_eq!(tour_cost(&dm, &[]), Some(0.0));
/// ```
pub fn tour_cost(distances: &DistanceMatrix, order: &[usize]) -> Option<f64> {
    if order.is_empty() {
        return Some(0.0);
    }
    let mut total = 0.0;
    let mut prev = 0;
    for &next in order.iter().chain(std::iter::once(&0)) {
        let leg = distances.get(prev, next);
        if !leg.is_finite() {
            return None;
        }
        total += leg;
        prev = next;
    }
    Some(total)
}

/// Returns `true` if `order` visits every index in `1..size` exactly once.
pub fn is_permutation(order: &[usize], size: usize) -> bool {
    if size == 0 || order.len() != size - 1 {
        return false;
    }
    let mut seen = vec![false; size];
    for &i in order {
        if i == 0 || i >= size || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
