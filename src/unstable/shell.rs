//! Shell sort with Shell's original gap sequence `len / 2, len / 4, .., 1`.
//!
//! Average complexity is around O(n log^2 n), worst case is O(n^2).

use std::mem;

sort_impl!("shell_sort_unstable");

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

    shell_sort(&mut v, &mut is_less);

    v
}

fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for gap in gaps(v.len()) {
        gapped_insertion_pass(v, gap, is_less);
    }
}

/// Shell's sequence, halving from `len / 2` down to and including 1.
fn gaps(len: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(len / 2), |gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}

/// Insertion sort over each of the `gap` interleaved subsequences `v[k], v[k + gap], ..`.
fn gapped_insertion_pass<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in gap..v.len() {
        let mut j = i;
        while j >= gap && is_less(&v[j], &v[j - gap]) {
            v.swap(j - gap, j);
            j -= gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_halve_down_to_one() {
        let gaps_of = |len| gaps(len).collect::<Vec<_>>();

        assert_eq!(gaps_of(8), [4, 2, 1]);
        assert_eq!(gaps_of(9), [4, 2, 1]);
        assert_eq!(gaps_of(20), [10, 5, 2, 1]);
        assert_eq!(gaps_of(100), [50, 25, 12, 6, 3, 1]);
        assert_eq!(gaps_of(2), [1]);
        assert!(gaps_of(1).is_empty());
        assert!(gaps_of(0).is_empty());
    }

    #[test]
    fn gap_pass_sorts_interleaved_runs() {
        let mut v = [8, 7, 6, 5, 4, 3, 2, 1];
        gapped_insertion_pass(&mut v, 4, &mut |a: &i32, b: &i32| a < b);

        // Each pair `(v[k], v[k + 4])` is now ordered.
        assert_eq!(v, [4, 3, 2, 1, 8, 7, 6, 5]);
    }
}
