//! Report sinks observed by the merge-sort driver.
//!
//! The driver calls [`ReportSink::report`] once per completed step (leaves
//! included). Sinks never influence the sort result.

/// Receiver of intermediate sort results tagged with their recursion depth.
pub trait ReportSink<T> {
    fn report(&mut self, values: &[T], depth: usize);
}

/// Any `FnMut(&[T], usize)` closure can act as a sink.
impl<T, F> ReportSink<T> for F
where
    F: FnMut(&[T], usize),
{
    fn report(&mut self, values: &[T], depth: usize) {
        self(values, depth)
    }
}

/// Sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl<T> ReportSink<T> for NoopSink {
    fn report(&mut self, _values: &[T], _depth: usize) {}
}

/// One recorded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub values: Vec<T>,
    pub depth: usize,
}

/// Sink recording every report in call order.
#[derive(Debug, Clone)]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    /// Steps reported at `depth`, in call order.
    pub fn at_depth(&self, depth: usize) -> impl Iterator<Item = &Step<T>> {
        self.steps.iter().filter(move |s| s.depth == depth)
    }

    /// Deepest depth reported so far (`None` when nothing was reported).
    pub fn max_depth(&self) -> Option<usize> {
        self.steps.iter().map(|s| s.depth).max()
    }
}

impl<T: Clone> ReportSink<T> for Trace<T> {
    fn report(&mut self, values: &[T], depth: usize) {
        self.steps.push(Step {
            values: values.to_vec(),
            depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        let mut sink = |values: &[u32], depth: usize| seen.push((values.len(), depth));
        sink.report(&[1, 2], 3);
        sink.report(&[], 0);
        assert_eq!(seen, vec![(2, 3), (0, 0)]);
    }

    #[test]
    fn trace_filters_by_depth() {
        let mut trace = Trace::new();
        trace.report(&[1u32], 1);
        trace.report(&[2u32], 0);
        trace.report(&[3u32], 1);
        let depth_one: Vec<_> = trace.at_depth(1).map(|s| s.values[0]).collect();
        assert_eq!(depth_one, vec![1, 3]);
        assert_eq!(trace.max_depth(), Some(1));
    }
}
