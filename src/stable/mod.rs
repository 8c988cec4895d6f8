// Equal elements keep their input order in these sorts.

pub mod bubble;
pub mod insertion;
