pub mod bidirectional_selection;
pub mod quick;
pub mod selection;
pub mod shell;

// Ties in the merge step go to the right run, so equal elements can swap sides.
pub mod merge;
