//! Query-string payload exchanged between the fallback and real documents.
//!
//! The fallback document moves the original path and query into the keys
//! `p` and `q` of the real document's query string. A literal `&` would split
//! the value, so it travels as [`AMP_TOKEN`] instead. The token itself is not
//! escaped: data that already contains `~and~` comes back with an `&` in its
//! place.

mod query;

pub use query::QueryMap;

/// Key carrying the original path (repository prefix removed).
pub const PATH_KEY: &str = "p";
/// Key carrying the original query string, without its leading `?`.
pub const QUERY_KEY: &str = "q";
/// Stand-in for a literal `&` inside an embedded value.
pub const AMP_TOKEN: &str = "~and~";

pub fn escape_amp(value: &str) -> String {
    value.replace('&', AMP_TOKEN)
}

pub fn unescape_amp(value: &str) -> String {
    value.replace(AMP_TOKEN, "&")
}
