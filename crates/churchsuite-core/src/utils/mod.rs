//! Helpers shared by the module tables.

pub mod query;

pub use query::{encode_query, maybe_bool_to_number};
