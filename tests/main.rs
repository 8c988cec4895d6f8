use std::collections::HashMap;

use sort_test_tools::patterns;

use sorters::ALGORITHMS;

mod bubble {
    sort_test_tools::instantiate_sort_tests!(sorters::stable::bubble::SortImpl);
}

mod insertion {
    sort_test_tools::instantiate_sort_tests!(sorters::stable::insertion::SortImpl);
}

mod selection {
    sort_test_tools::instantiate_sort_tests!(sorters::unstable::selection::SortImpl);
}

mod bidirectional_selection {
    sort_test_tools::instantiate_sort_tests!(sorters::unstable::bidirectional_selection::SortImpl);
}

mod merge {
    sort_test_tools::instantiate_sort_tests!(sorters::unstable::merge::SortImpl);
}

mod shell {
    sort_test_tools::instantiate_sort_tests!(sorters::unstable::shell::SortImpl);
}

mod quick {
    sort_test_tools::instantiate_sort_tests!(sorters::unstable::quick::SortImpl);
}

fn counts(v: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for val in v {
        *counts.entry(*val).or_insert(0) += 1;
    }

    counts
}

// --- TESTS ---

#[test]
fn demo_input() {
    let input = [1, 3, 5, 3, 7, 4, 8, 2];

    for (name, sort_fn) in ALGORITHMS {
        assert_eq!(sort_fn(&input), [1, 2, 3, 3, 4, 5, 7, 8], "{name}");
    }
}

#[test]
fn all_algorithms_agree() {
    let inputs = [
        patterns::random_uniform(333, -50..50),
        patterns::pipe_organ(64),
        patterns::saw_mixed(100, 7),
        patterns::descending(8),
        patterns::all_equal(4),
    ];

    for input in &inputs {
        let mut expected = input.clone();
        expected.sort();

        for (name, sort_fn) in ALGORITHMS {
            let sorted = sort_fn(input);

            assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "{name} not sorted");
            assert_eq!(counts(&sorted), counts(input), "{name} changed the multiset");
            assert_eq!(sorted, expected, "{name}");
        }
    }
}

#[test]
fn flat_exports_match_modules() {
    let input = patterns::random(50);

    assert_eq!(
        sorters::bubble_sort(&input),
        sorters::stable::bubble::sort(&input)
    );
    assert_eq!(
        sorters::quick_sort(&input),
        sorters::unstable::quick::sort(&input)
    );
}

#[test]
fn sub_merge_runs() {
    let left = sorters::merge_sort(&patterns::random_uniform(40, 0..10));
    let right = sorters::merge_sort(&patterns::random_uniform(25, 0..10));

    let mut expected = [left.clone(), right.clone()].concat();
    expected.sort();

    assert_eq!(sorters::sub_merge(left, right), expected);
}

#[test]
fn insert_sort_keeps_tag_order() {
    // Ordered by the key only, the second field is the input position.
    #[derive(Clone, Debug)]
    struct Tagged(i32, usize);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let input: Vec<Tagged> = [3, 1, 3, 2, 1, 3]
        .into_iter()
        .enumerate()
        .map(|(i, key)| Tagged(key, i))
        .collect();

    let tags = |v: Vec<Tagged>| v.into_iter().map(|t| t.1).collect::<Vec<_>>();

    assert_eq!(tags(sorters::insert_sort(&input)), [1, 4, 3, 0, 2, 5]);
    assert_eq!(tags(sorters::bubble_sort(&input)), [1, 4, 3, 0, 2, 5]);

    // Merge sort hands ties to the right run, so equal keys come out of order.
    assert_eq!(tags(sorters::merge_sort(&input)), [4, 1, 3, 5, 2, 0]);
}
