use std::ops::AddAssign;

/// Operation counters used to compare the algorithms empirically.
///
/// `assignments` counts writes on the hot paths (residual updates, parent/level/current-arc writes),
/// `comparisons` counts the tests that gate control flow (loop conditions, capacity and level checks).
/// The counters never influence the computed flow.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Metrics {
    pub assignments: u64,
    pub comparisons: u64,
}

impl Metrics {
    #[inline]
    pub(crate) fn assign(&mut self, n: u64) {
        self.assignments += n;
    }

    #[inline]
    pub(crate) fn compare(&mut self, n: u64) {
        self.comparisons += n;
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Self) {
        self.assignments += rhs.assignments;
        self.comparisons += rhs.comparisons;
    }
}

/// Outcome of one `solve` call: the flow pushed by that call and the work it took.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct MaxFlowResult<Flow> {
    pub flow: Flow,
    pub metrics: Metrics,
}

impl<Flow: Copy> MaxFlowResult<Flow> {
    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    #[inline]
    pub fn assignments(&self) -> u64 {
        self.metrics.assignments
    }

    #[inline]
    pub fn comparisons(&self) -> u64 {
        self.metrics.comparisons
    }
}
