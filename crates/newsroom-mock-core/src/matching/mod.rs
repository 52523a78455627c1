//! Request matching utilities.

mod query;
mod url;

pub use query::parse_query_string;
pub use url::{path_of, query_of, targets_api};
