//! Bubble sort without the early exit. Always does `len` full passes.

use std::mem;

sort_impl!("bubble_sort_stable");

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

    bubble_sort(&mut v, &mut is_less);

    v
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for _ in 0..len {
        for i in 1..len {
            // Only swap if strictly out of order, equal neighbours never move past each other.
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
            }
        }
    }
}
