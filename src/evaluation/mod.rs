//! Tour cost evaluation.

mod cost;

pub use cost::{is_permutation, tour_cost};
