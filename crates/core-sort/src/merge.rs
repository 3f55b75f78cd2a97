//! Stable two-way merge.

/// Merge two ascending slices into a new ascending `Vec`.
///
/// Uses a read cursor per input and a single output buffer sized to
/// `a.len() + b.len()`. On equal fronts the element from `a` wins, which keeps
/// the merge stable when `a` holds the elements that came first.
pub fn merge<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            out.push(a[i].clone());
            i += 1;
        } else {
            out.push(b[j].clone());
            j += 1;
        }
    }

    // One side is exhausted; drain the other unconditionally.
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
