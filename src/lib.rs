//! Classic textbook sorts. Every sort borrows its input and returns a new ascending `Vec`.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sort(v)
            }
        }
    };
}

pub mod stable;
pub mod unstable;
pub mod zoo;

pub use stable::bubble::sort as bubble_sort;
pub use stable::insertion::sort as insert_sort;
pub use unstable::bidirectional_selection::sort as bidirectional_selection_sort;
pub use unstable::merge::sort as merge_sort;
pub use unstable::merge::sub_merge;
pub use unstable::quick::sort as quick_sort;
pub use unstable::selection::sort as selection_sort;
pub use unstable::shell::sort as shell_sort;

/// Signature shared by every entry in [`ALGORITHMS`].
pub type SortFn = fn(&[i32]) -> Vec<i32>;

/// All sorts by name, in the order the demo prints them.
pub const ALGORITHMS: [(&str, SortFn); 7] = [
    ("bubble_sort", bubble_sort::<i32>),
    ("bidirectional_selection_sort", bidirectional_selection_sort::<i32>),
    ("selection_sort", selection_sort::<i32>),
    ("insert_sort", insert_sort::<i32>),
    ("merge_sort", merge_sort::<i32>),
    ("shell_sort", shell_sort::<i32>),
    ("quick_sort", quick_sort::<i32>),
];
