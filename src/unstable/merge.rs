//! Top-down recursive merge sort.
//!
//! The merge takes the left element only if it is strictly less than the right one, so on ties
//! the right run goes first. That makes the sort unstable across the split point, equal elements
//! from the right half end up in front of those from the left half.

use std::mem;

sort_impl!("merge_sort_unstable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    unstable_sort(v, |a, b| a.lt(b))
}

/// Merges two ascending runs into one ascending `Vec`. On ties the element from `right` is taken
/// first. Leftovers of whichever run is not yet exhausted are appended in order.
#[inline]
pub fn sub_merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    merge(left, right, &mut |a, b| a.lt(b))
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
    let v = v.to_vec();

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v;
    }

    merge_sort(v, &mut is_less)
}

fn merge_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return v;
    }

    // Odd lengths put the extra element into the right half.
    let right = v.split_off(len / 2);
    let left = v;

    let left = merge_sort(left, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(l, r),
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}
