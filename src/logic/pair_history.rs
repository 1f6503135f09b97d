//! Same-gender teammate counts.

/// Symmetric `n x n` matrix: cell (i, j) is how many matches players i and j
/// have shared a team. Only ever grows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairHistory {
    size: usize,
    cells: Vec<u32>,
}

impl PairHistory {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Record that `a` and `b` (0-based, distinct) were teammates once more.
    pub fn increment(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b, "a player cannot pair with themselves");
        debug_assert!(a < self.size && b < self.size);
        if a == b {
            return;
        }
        self.cells[a * self.size + b] += 1;
        self.cells[b * self.size + a] += 1;
    }

    /// Times `a` and `b` have been teammates; 0 on the diagonal.
    pub fn count(&self, a: usize, b: usize) -> u32 {
        if a == b {
            return 0;
        }
        self.cells[a * self.size + b]
    }

    /// Cost of a pair as used by the team splitter.
    pub fn pair_cost(&self, pair: [usize; 2]) -> u32 {
        self.count(pair[0], pair[1])
    }
}
