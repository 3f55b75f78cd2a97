//! Recursive merge-sort driver.

use crate::merge::merge;
use crate::sink::ReportSink;
use tracing::trace;

/// Sort `input` ascending, reporting every completed step from depth 0.
pub fn merge_sort<T, S>(input: &[T], sink: &mut S) -> Vec<T>
where
    T: Ord + Clone,
    S: ReportSink<T> + ?Sized,
{
    merge_sort_at(input, 0, sink)
}

/// Sort `input` ascending as if it were a subtree rooted at `depth`.
///
/// Leaves (length 1) are reported as-is. Longer inputs split at `len / 2`,
/// sort left then right at `depth + 1`, merge, and report the merged result at
/// `depth`. An empty input returns immediately without reporting.
pub fn merge_sort_at<T, S>(input: &[T], depth: usize, sink: &mut S) -> Vec<T>
where
    T: Ord + Clone,
    S: ReportSink<T> + ?Sized,
{
    match input.len() {
        0 => Vec::new(),
        1 => {
            let leaf = input.to_vec();
            sink.report(&leaf, depth);
            leaf
        }
        len => {
            let (left, right) = input.split_at(len / 2);
            let left = merge_sort_at(left, depth + 1, sink);
            let right = merge_sort_at(right, depth + 1, sink);
            let merged = merge(&left, &right);
            trace!(target: "sort", depth, len, "merge_step");
            sink.report(&merged, depth);
            merged
        }
    }
}

/// Number of distinct depths (lanes) a sort of `n` items reports to.
///
/// Splitting at `n / 2` leaves the larger half on the right, so the deepest
/// leaf sits at `ceil(log2 n)`.
pub fn lane_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (usize::BITS - (n - 1).leading_zeros()) as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NoopSink, Trace};

    #[test]
    fn sorts_small_input() {
        let sorted = merge_sort(&[5, 2, 4, 6, 1, 3], &mut NoopSink);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_input_reports_nothing() {
        let mut trace: Trace<u32> = Trace::new();
        let sorted = merge_sort::<u32, _>(&[], &mut trace);
        assert!(sorted.is_empty());
        assert!(trace.steps().is_empty());
    }

    #[test]
    fn single_element_reports_once_at_root() {
        let mut trace = Trace::new();
        assert_eq!(merge_sort(&[7u32], &mut trace), vec![7]);
        assert_eq!(trace.steps().len(), 1);
        assert_eq!(trace.steps()[0].depth, 0);
    }

    #[test]
    fn caller_input_untouched() {
        let input = vec![3, 1, 2];
        let _ = merge_sort(&input, &mut NoopSink);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn starting_depth_offsets_all_reports() {
        let mut trace = Trace::new();
        merge_sort_at(&[2u32, 1], 3, &mut trace);
        let depths: Vec<usize> = trace.steps().iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![4, 4, 3]);
    }

    #[test]
    fn lane_count_matches_trace() {
        assert_eq!(lane_count(0), 0);
        assert_eq!(lane_count(1), 1);
        assert_eq!(lane_count(2), 2);
        assert_eq!(lane_count(4), 3);
        assert_eq!(lane_count(5), 4);
        for n in 1..130usize {
            let input: Vec<usize> = (0..n).rev().collect();
            let mut trace = Trace::new();
            merge_sort(&input, &mut trace);
            assert_eq!(trace.max_depth().map(|d| d + 1), Some(lane_count(n)), "n={n}");
        }
    }
}
