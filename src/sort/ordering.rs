//! Ordering check.

/// Check that `data` is non-decreasing.
///
/// Stops at the first adjacent pair that is out of order. Empty and
/// single-element slices are ordered.
///
/// ```
/// use solitaire_sort::sort::is_ordered;
///
/// assert!(is_ordered::<u8>(&[]));
/// assert!(is_ordered(&[1, 1, 2]));
/// assert!(!is_ordered(&[1, 3, 2]));
/// ```
#[must_use]
pub fn is_ordered<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
