pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{DEFAULT_SEARCH_DEPTH, SearchResult, SearchStats, Searcher, search};
