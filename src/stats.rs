//! Instrumentation hooks for the divide-and-conquer search.

/// Receives events from a running closest-pair search.
///
/// All methods default to doing nothing.  The unit type `()` is the no-op observer used by
/// [`ClosestPair::solve`](crate::ClosestPair::solve); [Stats] counts everything.
pub trait Observer {
    /// A pairwise distance was computed.
    fn distance_evaluated(&mut self) {}

    /// The recursion bottomed out on `len` points at the given depth.
    fn base_case(&mut self, _len: usize, _depth: usize) {}

    /// A strip of `len` points was built around a dividing line.
    fn strip_built(&mut self, _len: usize) {}

    /// Two y-ordered halves totalling `len` points were merged.
    fn merged(&mut self, _len: usize) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn distance_evaluated(&mut self) {
        (**self).distance_evaluated();
    }

    fn base_case(&mut self, len: usize, depth: usize) {
        (**self).base_case(len, depth);
    }

    fn strip_built(&mut self, len: usize) {
        (**self).strip_built(len);
    }

    fn merged(&mut self, len: usize) {
        (**self).merged(len);
    }
}

/// Counters collected from a search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of pairwise distances computed.
    pub distance_evaluations: u64,
    /// Number of brute-force base cases.
    pub base_cases: u64,
    /// Number of strips built.
    pub strips: u64,
    /// Total number of points across all strips.
    pub strip_points: u64,
    /// Total number of points moved by y-merges.
    pub merged_points: u64,
    /// Deepest recursion level reached (the root is level 0).
    pub max_depth: usize,
}

impl Stats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for Stats {
    fn distance_evaluated(&mut self) {
        self.distance_evaluations += 1;
    }

    fn base_case(&mut self, _len: usize, depth: usize) {
        self.base_cases += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn strip_built(&mut self, len: usize) {
        self.strips += 1;
        self.strip_points += len as u64;
    }

    fn merged(&mut self, len: usize) {
        self.merged_points += len as u64;
    }
}
