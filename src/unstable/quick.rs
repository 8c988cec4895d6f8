//! Out-of-place three-way quicksort with the middle element as pivot.
//!
//! Every level moves its elements into fresh less, equal and greater partitions. The equal
//! partition is never recursed into, so inputs full of duplicates terminate quickly. The pivot
//! choice is deterministic, adversarial inputs can still drive it to O(n^2) and O(n) recursion
//! depth.

use std::mem;

sort_impl!("quick_sort_unstable");

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
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v.to_vec();
    }

    quicksort(v.to_vec(), &mut is_less)
}

fn quicksort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return v;
    }

    let pivot = v[len / 2].clone();
    let Partitions {
        less,
        equal,
        greater,
    } = partition(v, &pivot, is_less);

    let mut sorted = quicksort(less, is_less);
    sorted.extend(equal);
    sorted.extend(quicksort(greater, is_less));

    sorted
}

struct Partitions<T> {
    less: Vec<T>,
    equal: Vec<T>,
    greater: Vec<T>,
}

/// Moves every element of `v` into the partition matching its relation to `pivot`, keeping the
/// relative order within each partition.
fn partition<T, F>(v: Vec<T>, pivot: &T, is_less: &mut F) -> Partitions<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut partitions = Partitions {
        less: Vec::new(),
        equal: Vec::new(),
        greater: Vec::new(),
    };

    for elem in v {
        if is_less(&elem, pivot) {
            partitions.less.push(elem);
        } else if is_less(pivot, &elem) {
            partitions.greater.push(elem);
        } else {
            partitions.equal.push(elem);
        }
    }

    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_three_way() {
        let Partitions {
            less,
            equal,
            greater,
        } = partition(vec![3, 7, 3, 1, 9, 3, 0], &3, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(less, [1, 0]);
        assert_eq!(equal, [3, 3, 3]);
        assert_eq!(greater, [7, 9]);
    }

    #[test]
    fn all_duplicates_single_level() {
        let mut comparisons = 0;
        let sorted = quicksort(vec![5; 64], &mut |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        });

        assert_eq!(sorted, vec![5; 64]);
        // One partition pass with two comparisons per element and no recursion beyond that.
        assert_eq!(comparisons, 2 * 64);
    }
}
