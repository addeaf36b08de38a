//! Directory search client
//!
//! Search faculty and fellows through a remote directory service, with
//! debounced keyword search, type/unit/tag filters, client-side sorting and an
//! optional semantic (AI) mode that can carry a generated summary.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod network;
pub mod render;
pub mod results;
pub mod search;

pub use api::{DirectoryApi, Person, PersonType, RemoteDirectory};
pub use config::Settings;
pub use controller::{SearchController, View};
pub use error::{ApiError, ApiResult};
pub use results::ResultSet;
pub use search::{SearchMode, SearchState, SortKey};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
