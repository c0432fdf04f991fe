pub mod filter;

pub use filter::{EmptyQuery, filter, is_exact_match};
