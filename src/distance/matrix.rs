//! Dense distance matrix.

/// A dense n×n cost matrix stored in row-major order.
///
/// Unknown edges are stored as `f64::INFINITY`. The diagonal is zero and is
/// never read by the solvers.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set(0, 1, 2.5);
/// assert_eq!(dm.get(0, 1), 2.5);
/// assert!(!dm.is_known(1, 0));
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with every off-diagonal edge unknown.
    pub fn new(size: usize) -> Self {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or any
    /// entry is negative or NaN.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size || data.iter().any(|d| d.is_nan() || *d < 0.0) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from rows; `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Self::from_data(size, rows.concat())
    }

    /// Returns the cost from `from` to `to`, `f64::INFINITY` if unknown.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Returns `true` if the edge `from → to` has a finite cost.
    pub fn is_known(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    /// Two unknown edges count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_infinite() || b.is_infinite() {
                    if a != b {
                        return false;
                    }
                } else if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if node `i` has at least one known outgoing edge
    /// and at least one known incoming edge.
    pub fn is_connected_node(&self, i: usize) -> bool {
        let out = (0..self.size).any(|j| j != i && self.is_known(i, j));
        let inc = (0..self.size).any(|j| j != i && self.is_known(j, i));
        out && inc
    }
}
