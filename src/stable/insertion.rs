//! Insertion sort. Shifts each new element left past strictly greater predecessors.

use std::mem;

sort_impl!("insert_sort_stable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    stable_sort(v, |a, b| a.lt(b))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &[T], mut is_less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut v = v.to_vec();

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v;
    }

    insertion_sort(&mut v, &mut is_less);

    v
}

/// Sorts `v` by inserting `v[i]` into the sorted prefix `v[..i]`, for `i` in `1..len`.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Walking the new element down one slot at a time is the same as shifting the larger
        // prefix elements up. Ties stop the walk, which keeps the sort stable.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
