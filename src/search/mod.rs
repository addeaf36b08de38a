//! Search state and request building
//!
//! Holds the user's selections and turns them into lexical or
//! semantic requests for the directory service.

mod query;
mod state;

pub use query::{LexicalQuery, SearchRequest, SemanticQuery};
pub use state::{ModeTransition, SearchMode, SearchState, SortKey};
