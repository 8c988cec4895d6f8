//! Double ended selection sort. Each pass places both the minimum and the maximum of the unsorted
//! window, shrinking it from both ends.

use std::mem;

sort_impl!("bidirectional_selection_sort_unstable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    unstable_sort(v, |a, b| a.lt(b))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut v = v.to_vec();

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v;
    }

    bidirectional_selection_sort(&mut v, &mut is_less);

    v
}

fn bidirectional_selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = v.len() - 1;

    while left < right {
        let (min_idx, mut max_idx) = min_max_idx(v, left, right, is_less);

        v.swap(left, min_idx);

        // The swap above moved whatever sat at `left` to `min_idx`. If that was the maximum, it has
        // to be picked up from its new position.
        if max_idx == left {
            max_idx = min_idx;
        }

        v.swap(right, max_idx);

        left += 1;
        right -= 1;
    }
}

/// Returns the index of the minimum and the maximum in `v[left..=right]`. Ties keep the initial
/// candidates `left` for the minimum and `right` for the maximum, or the first strictly smaller
/// respectively larger element found scanning from the left.
fn min_max_idx<T, F>(v: &[T], left: usize, right: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_idx = left;
    let mut max_idx = right;

    for i in left..=right {
        if is_less(&v[i], &v[min_idx]) {
            min_idx = i;
        }
        if is_less(&v[max_idx], &v[i]) {
            max_idx = i;
        }
    }

    (min_idx, max_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_i32(v: &[i32]) -> Vec<i32> {
        let mut v = v.to_vec();
        bidirectional_selection_sort(&mut v, &mut |a, b| a < b);
        v
    }

    #[test]
    fn max_at_left_boundary() {
        // The maximum starts where the minimum gets swapped in.
        assert_eq!(sort_i32(&[9, 1, 5]), [1, 5, 9]);
        assert_eq!(sort_i32(&[9, 3, 5, 1]), [1, 3, 5, 9]);
    }

    #[test]
    fn max_and_min_swapped() {
        // Maximum at `left` and minimum at `right`. The correction points the maximum at `right`
        // after the first swap, turning the second swap into a no-op.
        assert_eq!(sort_i32(&[9, 4, 1]), [1, 4, 9]);
        assert_eq!(sort_i32(&[8, 2, 6, 4, 1]), [1, 2, 4, 6, 8]);
    }

    #[test]
    fn all_equal() {
        assert_eq!(sort_i32(&[5, 5, 5, 5]), [5, 5, 5, 5]);
    }

    #[test]
    fn min_max_idx_scans_window_only() {
        let v = [100, 3, 7, 1, -100];

        assert_eq!(min_max_idx(&v, 1, 3, &mut |a: &i32, b: &i32| a < b), (3, 2));
    }
}
