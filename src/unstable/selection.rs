//! Selection sort. Swaps the minimum of the unsorted suffix into place, one position at a time.

use std::mem;

sort_impl!("selection_sort_unstable");

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

    selection_sort(&mut v, &mut is_less);

    v
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        v.swap(i, min_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_reorders_equal_keys() {
        // (key, tag) ordered by key only. The first pass swaps (2, 'a') behind (2, 'b').
        let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
        selection_sort(&mut v, &mut |a, b| a.0 < b.0);

        assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
    }
}
