//! Merge sort core: input generation, the merge primitive, and the recursive
//! driver that reports every completed step to an injected sink.
//!
//! The crate is deliberately free of any rendering concern. Callers observe
//! the sort through [`ReportSink`], which receives each intermediate result
//! together with the recursion depth that produced it. Renderers map that
//! depth to a visual lane (row); tests record it with [`Trace`].
//!
//! Invariants:
//! - `merge` inputs must each be sorted ascending; this is not checked.
//! - `merge_sort` returns a sorted permutation of its input and never mutates
//!   or aliases the caller's slice.
//! - Reports at any given depth arrive in left-to-right positional order
//!   because the driver finishes the left branch (including its reports)
//!   before starting the right one.
//! - Zero-length input returns immediately with no report.
//!
//! Exposed Components:
//! - `random`: `random_sequence`, `shuffle` (Fisher-Yates), `range`,
//!   `shuffled_range`.
//! - `merge`: cursor-based stable merge of two sorted slices.
//! - `driver`: `merge_sort` / `merge_sort_at` plus `lane_count`.
//! - `sink`: the `ReportSink` seam, `Trace` recorder, `NoopSink`.

pub mod driver;
pub mod merge;
pub mod random;
pub mod sink;

pub use driver::{lane_count, merge_sort, merge_sort_at};
pub use merge::merge;
pub use random::{random_sequence, range, shuffle, shuffled_range};
pub use sink::{NoopSink, ReportSink, Step, Trace};
