/// A sort implementation that leaves its input alone and returns a new, sorted `Vec`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;
}

pub mod patterns;
