//! Result sets and their client-side ordering

mod collate;
mod set;

pub use collate::compare_names;
pub use set::{count_label, ResultSet};
